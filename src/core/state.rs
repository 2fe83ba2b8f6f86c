//! # Booking State
//!
//! Core business state for a booking session. Domain types only, with no
//! TUI-specific fields. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn Catalog>     // injected reference data
//! ├── booking: BookingState         // everything the user has chosen
//! │   ├── config: TripConfig        // step 1 form
//! │   └── days: Vec<DaySelection>   // step 2 rows, one per day
//! └── status_message: String        // status bar text
//! ```
//!
//! `BookingState` only changes through `update(state, action)` in action.rs,
//! which hands back a fresh value every time. `App` just holds the latest one.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::{Catalog, HotelId, MealId};
use crate::core::action::{Action, update};
use crate::core::pricing::{PricingResult, compute_pricing};

/// Meal plan for the stay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardTypeCode {
    /// Full board: lunch and dinner may both be chosen.
    #[default]
    FB,
    /// Half board: at most one of lunch or dinner per day.
    HB,
    /// No board: no meals.
    NB,
}

impl BoardTypeCode {
    pub const ALL: [BoardTypeCode; 3] = [BoardTypeCode::FB, BoardTypeCode::HB, BoardTypeCode::NB];

    pub fn code(&self) -> &'static str {
        match self {
            BoardTypeCode::FB => "FB",
            BoardTypeCode::HB => "HB",
            BoardTypeCode::NB => "NB",
        }
    }

    /// Cycles FB → HB → NB → FB.
    pub fn next(&self) -> Self {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(*self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BoardTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BoardTypeCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|board| board.code() == s)
            .ok_or_else(|| format!("unknown board type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

/// Trip-level parameters from the first step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripConfig {
    pub citizenship: String,
    /// Stored verbatim, expected in `YYYY-MM-DD` form.
    pub start_date: String,
    pub days_count: usize,
    pub destination: Option<String>,
    pub board_type: BoardTypeCode,
}

/// Hotel and meal choices for one day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySelection {
    pub day_index: usize,
    pub hotel_id: Option<HotelId>,
    pub lunch_id: Option<MealId>,
    pub dinner_id: Option<MealId>,
}

impl DaySelection {
    /// A day with nothing selected yet.
    pub fn empty(day_index: usize) -> Self {
        Self {
            day_index,
            hotel_id: None,
            lunch_id: None,
            dinner_id: None,
        }
    }

    pub fn meal(&self, meal_type: MealType) -> Option<MealId> {
        match meal_type {
            MealType::Lunch => self.lunch_id,
            MealType::Dinner => self.dinner_id,
        }
    }
}

/// Everything the user has configured. `days.len() == config.days_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingState {
    pub config: TripConfig,
    pub days: Vec<DaySelection>,
}

/// Session-scoped holder: the current booking plus the catalog it is priced against.
pub struct App {
    pub catalog: Arc<dyn Catalog>,
    pub booking: BookingState,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            booking: BookingState::default(),
            status_message: String::from("Step 1: configure your trip"),
        }
    }

    /// Apply one action, replacing the booking with the reducer's result.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatch: {:?}", action);
        self.booking = update(&self.booking, action);
    }

    /// Price the current booking. Always recomputed, never cached.
    pub fn pricing(&self) -> PricingResult {
        compute_pricing(&self.booking, self.catalog.as_ref())
    }
}
