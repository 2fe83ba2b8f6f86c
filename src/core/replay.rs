//! # Action Log Replay
//!
//! Rebuilds a booking from a JSON-lines action log, one action per line:
//!
//! ```text
//! {"type": "SET_DAYS_COUNT", "payload": 2}
//! {"type": "SET_DAY_MEAL", "payload": {"dayIndex": 0, "mealType": "lunch", "mealId": 4}}
//! ```
//!
//! Lines with an unknown `type`, or that don't parse, are skipped with a
//! warning: the state carries on unchanged.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::catalog::{HotelId, MealId};
use crate::core::action::{Action, update};
use crate::core::state::{BookingState, MealType};

#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "action log I/O error: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayHotelPayload {
    day_index: usize,
    hotel_id: Option<HotelId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayMealPayload {
    day_index: usize,
    meal_type: MealType,
    meal_id: Option<MealId>,
}

/// Day counts arrive from free-text fields: anything non-numeric counts as 0.
fn lenient_count(payload: &Value) -> i64 {
    match payload {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .or_else(|_| s.parse::<f64>().map(|f| f.trunc() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn text(payload: Value) -> String {
    match payload {
        Value::String(s) => s,
        _ => String::new(),
    }
}

/// Parse one log line. `None` means "no action": unknown tag or bad payload.
pub fn parse_action(line: &str) -> Option<Action> {
    let raw: RawAction = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Skipping malformed action line: {e}");
            return None;
        }
    };

    let action = match raw.kind.as_str() {
        "SET_CITIZENSHIP" => Action::SetCitizenship(text(raw.payload)),
        "SET_START_DATE" => Action::SetStartDate(text(raw.payload)),
        "SET_DAYS_COUNT" => Action::SetDaysCount(lenient_count(&raw.payload)),
        "SET_DESTINATION" => {
            let name = text(raw.payload);
            Action::SetDestination((!name.is_empty()).then_some(name))
        }
        "SET_BOARD_TYPE" => match text(raw.payload).parse() {
            Ok(code) => Action::SetBoardType(code),
            Err(e) => {
                warn!("Skipping SET_BOARD_TYPE: {e}");
                return None;
            }
        },
        "SET_DAY_HOTEL" => match serde_json::from_value::<DayHotelPayload>(raw.payload) {
            Ok(p) => Action::SetDayHotel {
                day_index: p.day_index,
                hotel_id: p.hotel_id,
            },
            Err(e) => {
                warn!("Skipping SET_DAY_HOTEL with bad payload: {e}");
                return None;
            }
        },
        "SET_DAY_MEAL" => match serde_json::from_value::<DayMealPayload>(raw.payload) {
            Ok(p) => Action::SetDayMeal {
                day_index: p.day_index,
                meal_type: p.meal_type,
                meal_id: p.meal_id,
            },
            Err(e) => {
                warn!("Skipping SET_DAY_MEAL with bad payload: {e}");
                return None;
            }
        },
        other => {
            warn!("Ignoring unknown action type '{other}'");
            return None;
        }
    };
    Some(action)
}

/// Fold every line of a log through the reducer, starting from `initial`.
/// Blank lines are ignored.
pub fn replay<'a>(lines: impl IntoIterator<Item = &'a str>, initial: BookingState) -> BookingState {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(initial, |state, line| match parse_action(line) {
            Some(action) => {
                debug!("Replay: {:?}", action);
                update(&state, action)
            }
            None => state,
        })
}

/// Replay a log file from a fresh booking.
pub fn replay_file(path: &Path) -> Result<BookingState, ReplayError> {
    let contents = fs::read_to_string(path).map_err(ReplayError::Io)?;
    Ok(replay(contents.lines(), BookingState::default()))
}
