//! # Catalog
//!
//! Static reference data the booking core reads but never writes: countries,
//! hotels, meals and board-type descriptions.
//!
//! The core only ever sees the [`Catalog`] trait, so the built-in tables can
//! be swapped for a TOML file (see [`load_catalog`]) or a test fixture.
//!
//! ```text
//! CatalogData
//! ├── board_types: Vec<BoardType>
//! └── countries: Vec<CountryEntry>
//!     ├── id, name
//!     ├── hotels: Vec<Hotel>
//!     └── meals: MealMenu { lunch, dinner }
//! ```

mod builtin;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::core::config::ConfigError;

pub type HotelId = u32;
pub type MealId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub price: f64,
}

/// Lunch and dinner options offered in one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealMenu {
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardType {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Read-only lookup service queried by the reducer's consumers.
///
/// Lookups that miss return `None`. Callers treat a miss as "absent",
/// never as an error.
pub trait Catalog {
    fn countries(&self) -> Vec<Country>;

    fn board_types(&self) -> &[BoardType];

    fn hotels_for(&self, country: &str) -> Option<&[Hotel]>;

    fn meals_for(&self, country: &str) -> Option<&MealMenu>;

    fn board_type_info(&self, code: &str) -> Option<&BoardType> {
        self.board_types().iter().find(|b| b.code == code)
    }

    fn find_hotel(&self, country: &str, id: HotelId) -> Option<&Hotel> {
        self.hotels_for(country)?.iter().find(|h| h.id == id)
    }
}

/// Look up a meal by exact id in a list.
pub fn find_meal(meals: &[Meal], id: MealId) -> Option<&Meal> {
    meals.iter().find(|m| m.id == id)
}

// ============================================================================
// Catalog data (built-in or loaded from TOML)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub meals: MealMenu,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub board_types: Vec<BoardType>,
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
}

impl CatalogData {
    /// The reference data set shipped with the binary.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    fn country(&self, name: &str) -> Option<&CountryEntry> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Reject data the lookups can't answer unambiguously.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for country in self.countries() {
            if !ids.insert(country.id) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate country id {} ('{}')",
                    country.id, country.name
                )));
            }
        }

        let mut names = HashSet::new();
        for country in &self.countries {
            if !names.insert(country.name.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate country '{}'",
                    country.name
                )));
            }

            let mut hotel_ids = HashSet::new();
            for hotel in &country.hotels {
                if !hotel_ids.insert(hotel.id) {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "duplicate hotel id {} in '{}'",
                        hotel.id, country.name
                    )));
                }
                check_price(&hotel.name, hotel.price)?;
            }

            for meal in country.meals.lunch.iter().chain(&country.meals.dinner) {
                check_price(&meal.name, meal.price)?;
            }
        }
        Ok(())
    }
}

fn check_price(name: &str, price: f64) -> Result<(), ConfigError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCatalog(format!(
            "'{name}' has invalid price {price}"
        )))
    }
}

impl Catalog for CatalogData {
    fn countries(&self) -> Vec<Country> {
        self.countries
            .iter()
            .map(|c| Country {
                id: c.id,
                name: c.name.clone(),
            })
            .collect()
    }

    fn board_types(&self) -> &[BoardType] {
        &self.board_types
    }

    fn hotels_for(&self, country: &str) -> Option<&[Hotel]> {
        self.country(country).map(|c| c.hotels.as_slice())
    }

    fn meals_for(&self, country: &str) -> Option<&MealMenu> {
        self.country(country).map(|c| &c.meals)
    }
}

/// Load and validate a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<CatalogData, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let data: CatalogData = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    data.validate()?;
    info!(
        "Loaded catalog from {} ({} countries)",
        path.display(),
        data.countries.len()
    );
    debug!("Catalog: {:?}", data);
    Ok(data)
}

/// Build the session catalog: the file when one is configured and valid,
/// otherwise the built-in data.
pub fn resolve_catalog(path: Option<&Path>) -> Arc<dyn Catalog> {
    let Some(path) = path else {
        info!("Using built-in catalog");
        return Arc::new(CatalogData::builtin());
    };
    match load_catalog(path) {
        Ok(data) => Arc::new(data),
        Err(e) => {
            warn!("Failed to load catalog {}: {}; using built-in data", path.display(), e);
            Arc::new(CatalogData::builtin())
        }
    }
}
