//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::catalog::{CatalogData, CountryEntry, Hotel, Meal, MealMenu};
use crate::core::action::{Action, update};
use crate::core::state::{App, BookingState, MealType};

/// A one-country catalog with fractional prices.
pub fn fixture_catalog() -> CatalogData {
    CatalogData {
        board_types: CatalogData::builtin().board_types,
        countries: vec![CountryEntry {
            id: 1,
            name: "Testland".to_string(),
            hotels: vec![Hotel {
                id: 1,
                name: "Test Inn".to_string(),
                price: 80.5,
            }],
            meals: MealMenu {
                lunch: vec![Meal {
                    id: 2,
                    name: "Soup".to_string(),
                    price: 7.25,
                }],
                dinner: vec![Meal {
                    id: 3,
                    name: "Stew".to_string(),
                    price: 12.0,
                }],
            },
        }],
    }
}

/// Three days in Testland: hotel + lunch, hotel + dinner, nothing.
pub fn priced_state() -> BookingState {
    let actions = vec![
        Action::SetDestination(Some("Testland".to_string())),
        Action::SetDaysCount(3),
        Action::SetDayHotel {
            day_index: 0,
            hotel_id: Some(1),
        },
        Action::SetDayMeal {
            day_index: 0,
            meal_type: MealType::Lunch,
            meal_id: Some(2),
        },
        Action::SetDayHotel {
            day_index: 1,
            hotel_id: Some(1),
        },
        Action::SetDayMeal {
            day_index: 1,
            meal_type: MealType::Dinner,
            meal_id: Some(3),
        },
    ];
    actions
        .into_iter()
        .fold(BookingState::default(), |state, action| update(&state, action))
}

/// Creates a test App backed by the fixture catalog.
pub fn test_app() -> App {
    App::new(Arc::new(fixture_catalog()))
}
