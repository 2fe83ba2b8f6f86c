//! Built-in reference data: three destinations and the FB/HB/NB plans.

use super::{BoardType, CatalogData, CountryEntry, Hotel, Meal, MealMenu};

fn hotel(id: u32, name: &str, price: f64) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        price,
    }
}

fn meal(id: u32, name: &str, price: f64) -> Meal {
    Meal {
        id,
        name: name.to_string(),
        price,
    }
}

fn board(code: &str, name: &str, description: &str) -> BoardType {
    BoardType {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn catalog() -> CatalogData {
    CatalogData {
        board_types: vec![
            board("FB", "Full Board", "Breakfast, lunch and dinner included"),
            board("HB", "Half Board", "Breakfast and one main meal included"),
            board("NB", "No Board", "No meals included"),
        ],
        countries: vec![
            CountryEntry {
                id: 1,
                name: "Turkey".to_string(),
                hotels: vec![
                    hotel(101, "Hilton Istanbul", 120.0),
                    hotel(102, "Titanic Antalya", 90.0),
                ],
                meals: MealMenu {
                    lunch: vec![
                        meal(4, "Chicken Pilaf", 10.0),
                        meal(5, "Lentil Soup Set", 8.0),
                        meal(6, "Veggie Plate", 9.0),
                    ],
                    dinner: vec![
                        meal(1, "Turkish Kebab", 15.0),
                        meal(2, "Istanbul Fish Plate", 18.0),
                        meal(3, "Traditional Meat Stew", 20.0),
                    ],
                },
            },
            CountryEntry {
                id: 2,
                name: "UAE".to_string(),
                hotels: vec![
                    hotel(201, "Dubai Marina Hotel", 200.0),
                    hotel(202, "Palm Jumeirah Resort", 300.0),
                ],
                meals: MealMenu {
                    lunch: vec![
                        meal(9, "Shawarma Plate", 12.0),
                        meal(10, "Hummus & Falafel Set", 11.0),
                    ],
                    dinner: vec![
                        meal(7, "Arabic Mixed Grill", 25.0),
                        meal(8, "Dubai Seafood Dinner", 30.0),
                    ],
                },
            },
            CountryEntry {
                id: 3,
                name: "Italy".to_string(),
                hotels: vec![hotel(301, "Rome Center Hotel", 150.0)],
                meals: MealMenu {
                    lunch: vec![
                        meal(13, "Pizza Margherita", 12.0),
                        meal(14, "Lasagna Lunch Set", 14.0),
                    ],
                    dinner: vec![
                        meal(11, "Pasta Carbonara", 20.0),
                        meal(12, "Italian Seafood Dinner", 28.0),
                    ],
                },
            },
        ],
    }
}
