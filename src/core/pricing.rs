//! # Pricing
//!
//! Joins a `BookingState` against the catalog to get per-day and grand totals.
//! Stateless: call it as often as you like, it recomputes from scratch.
//!
//! ```text
//! total_for_day = hotel + lunch + dinner     (absent → 0)
//! grand_total   = Σ total_for_day
//! ```

use serde::Serialize;

use crate::catalog::{Catalog, Hotel, Meal, MealMenu, find_meal};
use crate::core::state::BookingState;

/// Label for a selection that is unset or can't be resolved.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPricing {
    pub day_index: usize,
    pub hotel_label: String,
    pub hotel_price: f64,
    pub lunch_label: String,
    pub lunch_price: f64,
    pub dinner_label: String,
    pub dinner_price: f64,
    pub total_for_day: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub days: Vec<DayPricing>,
    pub grand_total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTypeMeta {
    pub name: String,
    pub description: String,
}

pub fn compute_pricing(state: &BookingState, catalog: &dyn Catalog) -> PricingResult {
    let Some(destination) = state.config.destination.as_deref() else {
        return PricingResult::default();
    };
    if state.days.is_empty() {
        return PricingResult::default();
    }

    let hotels = catalog.hotels_for(destination).unwrap_or_default();
    let empty_menu = MealMenu::default();
    let meals = catalog.meals_for(destination).unwrap_or(&empty_menu);

    let days: Vec<DayPricing> = state
        .days
        .iter()
        .map(|day| {
            let hotel = day
                .hotel_id
                .and_then(|id| hotels.iter().find(|h| h.id == id));
            let lunch = day.lunch_id.and_then(|id| find_meal(&meals.lunch, id));
            let dinner = day.dinner_id.and_then(|id| find_meal(&meals.dinner, id));

            let (hotel_label, hotel_price) = priced(hotel.map(hotel_parts));
            let (lunch_label, lunch_price) = priced(lunch.map(meal_parts));
            let (dinner_label, dinner_price) = priced(dinner.map(meal_parts));

            DayPricing {
                day_index: day.day_index,
                hotel_label,
                hotel_price,
                lunch_label,
                lunch_price,
                dinner_label,
                dinner_price,
                total_for_day: hotel_price + lunch_price + dinner_price,
            }
        })
        .collect();

    let grand_total = days.iter().map(|d| d.total_for_day).sum();

    PricingResult { days, grand_total }
}

fn hotel_parts(hotel: &Hotel) -> (&str, f64) {
    (&hotel.name, hotel.price)
}

fn meal_parts(meal: &Meal) -> (&str, f64) {
    (&meal.name, meal.price)
}

/// `"{name} (${price})"` and the price, or the placeholder and zero.
fn priced(item: Option<(&str, f64)>) -> (String, f64) {
    match item {
        Some((name, price)) => (format!("{name} (${price})"), price),
        None => (PLACEHOLDER.to_string(), 0.0),
    }
}

/// Display name and description for a board-type code. Unknown codes
/// fall back to the code itself with an empty description.
pub fn board_type_meta(code: &str, catalog: &dyn Catalog) -> BoardTypeMeta {
    match catalog.board_type_info(code) {
        Some(board) => BoardTypeMeta {
            name: board.name.clone(),
            description: board.description.clone(),
        },
        None => BoardTypeMeta {
            name: code.to_string(),
            description: String::new(),
        },
    }
}

/// Two-decimal display form, e.g. `$145.00`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}
