//! # Actions
//!
//! Everything the user can do to a booking becomes an `Action`.
//! Typing a citizenship? That's `Action::SetCitizenship(text)`.
//! Picking a lunch for day 2? That's `Action::SetDayMeal { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! &State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&state, action), expected)`.
//! And debuggable: log every action, replay the exact session (see `replay`).

use crate::catalog::{HotelId, MealId};
use crate::core::state::{BoardTypeCode, BookingState, DaySelection, MealType};

/// Longest trip a booking can hold. Larger counts clamp to this.
pub const MAX_DAYS: usize = 999;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCitizenship(String),
    SetStartDate(String),
    /// Clamped to `0..=MAX_DAYS`.
    SetDaysCount(i64),
    SetDestination(Option<String>),
    SetBoardType(BoardTypeCode),
    SetDayHotel {
        day_index: usize,
        hotel_id: Option<HotelId>,
    },
    SetDayMeal {
        day_index: usize,
        meal_type: MealType,
        meal_id: Option<MealId>,
    },
}

/// Pure state transition. The input is never modified.
pub fn update(state: &BookingState, action: Action) -> BookingState {
    match action {
        Action::SetCitizenship(citizenship) => {
            let mut next = state.clone();
            next.config.citizenship = citizenship;
            next
        }
        Action::SetStartDate(start_date) => {
            let mut next = state.clone();
            next.config.start_date = start_date;
            next
        }
        Action::SetDaysCount(n) => {
            let count = usize::try_from(n.max(0)).map_or(MAX_DAYS, |n| n.min(MAX_DAYS));
            let mut next = state.clone();
            next.config.days_count = count;
            next.days = resize_days(&state.days, count);
            next
        }
        Action::SetDestination(destination) => {
            // Existing per-day picks are kept; stale ids price as absent.
            let mut next = state.clone();
            next.config.destination = destination;
            next
        }
        Action::SetBoardType(board_type) => {
            let mut next = state.clone();
            next.config.board_type = board_type;
            if board_type == BoardTypeCode::NB {
                for day in &mut next.days {
                    day.lunch_id = None;
                    day.dinner_id = None;
                }
            }
            next
        }
        Action::SetDayHotel {
            day_index,
            hotel_id,
        } => {
            map_day(state, day_index, |day| DaySelection {
                hotel_id,
                ..day.clone()
            })
        }
        Action::SetDayMeal {
            day_index,
            meal_type,
            meal_id,
        } => match state.config.board_type {
            BoardTypeCode::NB => state.clone(),
            BoardTypeCode::HB => map_day(state, day_index, |day| match meal_type {
                MealType::Lunch => DaySelection {
                    lunch_id: meal_id,
                    dinner_id: None,
                    ..day.clone()
                },
                MealType::Dinner => DaySelection {
                    lunch_id: None,
                    dinner_id: meal_id,
                    ..day.clone()
                },
            }),
            BoardTypeCode::FB => map_day(state, day_index, |day| match meal_type {
                MealType::Lunch => DaySelection {
                    lunch_id: meal_id,
                    ..day.clone()
                },
                MealType::Dinner => DaySelection {
                    dinner_id: meal_id,
                    ..day.clone()
                },
            }),
        },
    }
}

/// Grow with empty days or truncate, keeping retained entries untouched.
fn resize_days(days: &[DaySelection], count: usize) -> Vec<DaySelection> {
    let mut next: Vec<DaySelection> = days.iter().take(count).cloned().collect();
    next.extend((next.len()..count).map(DaySelection::empty));
    next
}

/// Rebuild the day list with `f` applied to the day matching `day_index`.
/// A missing index leaves every day as it was.
fn map_day(
    state: &BookingState,
    day_index: usize,
    f: impl Fn(&DaySelection) -> DaySelection,
) -> BookingState {
    let days = state
        .days
        .iter()
        .map(|day| {
            if day.day_index == day_index {
                f(day)
            } else {
                day.clone()
            }
        })
        .collect();
    BookingState {
        config: state.config.clone(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_days(n: i64) -> BookingState {
        update(&BookingState::default(), Action::SetDaysCount(n))
    }

    fn set_meal(
        state: &BookingState,
        day: usize,
        meal_type: MealType,
        id: Option<MealId>,
    ) -> BookingState {
        update(
            state,
            Action::SetDayMeal {
                day_index: day,
                meal_type,
                meal_id: id,
            },
        )
    }

    fn set_hotel(state: &BookingState, day: usize, id: Option<HotelId>) -> BookingState {
        update(
            state,
            Action::SetDayHotel {
                day_index: day,
                hotel_id: id,
            },
        )
    }

    #[test]
    fn test_scalar_fields_replaced_verbatim() {
        let state = BookingState::default();
        let state = update(&state, Action::SetCitizenship("  Azerbaijan ".to_string()));
        let state = update(&state, Action::SetStartDate("not-a-date".to_string()));
        assert_eq!(state.config.citizenship, "  Azerbaijan ");
        assert_eq!(state.config.start_date, "not-a-date");
    }

    #[test]
    fn test_days_count_sets_dense_indices() {
        for n in [0usize, 1, 3, 7] {
            let state = with_days(n as i64);
            assert_eq!(state.config.days_count, n);
            assert_eq!(state.days.len(), n);
            let indices: Vec<usize> = state.days.iter().map(|d| d.day_index).collect();
            assert_eq!(indices, (0..n).collect::<Vec<_>>());
            assert!(state.days.iter().all(|d| *d == DaySelection::empty(d.day_index)));
        }
    }

    #[test]
    fn test_negative_days_count_clamps_to_zero() {
        let state = with_days(4);
        let state = update(&state, Action::SetDaysCount(-3));
        assert_eq!(state.config.days_count, 0);
        assert!(state.days.is_empty());
    }

    #[test]
    fn test_huge_days_count_clamps_to_max() {
        let state = with_days(i64::MAX);
        assert_eq!(state.config.days_count, MAX_DAYS);
        assert_eq!(state.days.len(), MAX_DAYS);
        assert_eq!(state.days[MAX_DAYS - 1].day_index, MAX_DAYS - 1);

        let state = update(&state, Action::SetDaysCount(MAX_DAYS as i64 + 1));
        assert_eq!(state.days.len(), MAX_DAYS);
    }

    #[test]
    fn test_grow_then_shrink_preserves_retained_days() {
        let state = with_days(3);
        let state = set_hotel(&state, 1, Some(101));
        let state = update(&state, Action::SetDaysCount(5));
        assert_eq!(state.days.len(), 5);
        assert_eq!(state.days[4], DaySelection::empty(4));
        let state = update(&state, Action::SetDaysCount(3));
        assert_eq!(state.days.len(), 3);
        assert_eq!(state.days[1].hotel_id, Some(101));
    }

    #[test]
    fn test_shrink_drops_trailing_selections() {
        let state = with_days(3);
        let state = set_hotel(&state, 2, Some(102));
        let state = update(&state, Action::SetDaysCount(2));
        let state = update(&state, Action::SetDaysCount(3));
        // Day 2 was recreated empty
        assert_eq!(state.days[2], DaySelection::empty(2));
    }

    #[test]
    fn test_destination_change_keeps_selections() {
        let state = update(&with_days(1), Action::SetDestination(Some("Turkey".to_string())));
        let state = set_hotel(&state, 0, Some(101));
        let state = update(&state, Action::SetDestination(Some("Italy".to_string())));
        assert_eq!(state.config.destination.as_deref(), Some("Italy"));
        assert_eq!(state.days[0].hotel_id, Some(101));
        let state = update(&state, Action::SetDestination(None));
        assert_eq!(state.config.destination, None);
    }

    #[test]
    fn test_no_board_clears_meals_keeps_hotels() {
        let state = with_days(2);
        let state = set_hotel(&state, 0, Some(101));
        let state = set_meal(&state, 0, MealType::Lunch, Some(4));
        let state = set_meal(&state, 1, MealType::Dinner, Some(1));
        let state = update(&state, Action::SetBoardType(BoardTypeCode::NB));
        assert_eq!(state.config.board_type, BoardTypeCode::NB);
        for day in &state.days {
            assert_eq!(day.lunch_id, None);
            assert_eq!(day.dinner_id, None);
        }
        assert_eq!(state.days[0].hotel_id, Some(101));
    }

    #[test]
    fn test_leaving_no_board_restores_nothing() {
        let state = set_meal(&with_days(1), 0, MealType::Lunch, Some(4));
        let state = update(&state, Action::SetBoardType(BoardTypeCode::NB));
        let state = update(&state, Action::SetBoardType(BoardTypeCode::FB));
        assert_eq!(state.days[0].lunch_id, None);
    }

    #[test]
    fn test_switching_to_half_board_keeps_existing_meals() {
        let state = with_days(1);
        let state = set_meal(&state, 0, MealType::Lunch, Some(4));
        let state = set_meal(&state, 0, MealType::Dinner, Some(1));
        let state = update(&state, Action::SetBoardType(BoardTypeCode::HB));
        assert_eq!(state.days[0].lunch_id, Some(4));
        assert_eq!(state.days[0].dinner_id, Some(1));
    }

    #[test]
    fn test_meal_is_noop_under_no_board() {
        let state = update(&with_days(2), Action::SetBoardType(BoardTypeCode::NB));
        for meal_type in [MealType::Lunch, MealType::Dinner] {
            for id in [Some(4), None] {
                assert_eq!(set_meal(&state, 0, meal_type, id), state);
            }
        }
    }

    #[test]
    fn test_half_board_lunch_then_dinner() {
        let state = update(&with_days(1), Action::SetBoardType(BoardTypeCode::HB));
        let state = set_meal(&state, 0, MealType::Lunch, Some(4));
        assert_eq!(state.days[0].lunch_id, Some(4));
        assert_eq!(state.days[0].dinner_id, None);
        let state = set_meal(&state, 0, MealType::Dinner, Some(1));
        assert_eq!(state.days[0].lunch_id, None);
        assert_eq!(state.days[0].dinner_id, Some(1));
    }

    #[test]
    fn test_half_board_never_sets_both() {
        let mut state = update(&with_days(3), Action::SetBoardType(BoardTypeCode::HB));
        let steps = [
            (0, MealType::Lunch, Some(4)),
            (1, MealType::Dinner, Some(2)),
            (0, MealType::Dinner, Some(3)),
            (1, MealType::Lunch, Some(5)),
            (2, MealType::Lunch, None),
            (2, MealType::Dinner, Some(1)),
        ];
        for (day, meal_type, id) in steps {
            state = set_meal(&state, day, meal_type, id);
            assert!(
                state
                    .days
                    .iter()
                    .all(|d| !(d.lunch_id.is_some() && d.dinner_id.is_some()))
            );
        }
    }

    #[test]
    fn test_half_board_clearing_also_clears_other() {
        let state = update(&with_days(1), Action::SetBoardType(BoardTypeCode::HB));
        let state = set_meal(&state, 0, MealType::Dinner, Some(1));
        let state = set_meal(&state, 0, MealType::Lunch, None);
        assert_eq!(state.days[0].lunch_id, None);
        assert_eq!(state.days[0].dinner_id, None);
    }

    #[test]
    fn test_full_board_allows_both_meals() {
        let state = with_days(1);
        let state = set_meal(&state, 0, MealType::Lunch, Some(4));
        let state = set_meal(&state, 0, MealType::Dinner, Some(1));
        assert_eq!(state.days[0].lunch_id, Some(4));
        assert_eq!(state.days[0].dinner_id, Some(1));
        let state = set_meal(&state, 0, MealType::Lunch, None);
        assert_eq!(state.days[0].lunch_id, None);
        assert_eq!(state.days[0].dinner_id, Some(1));
    }

    #[test]
    fn test_unknown_day_index_is_noop() {
        let state = with_days(2);
        assert_eq!(set_hotel(&state, 5, Some(101)), state);
        assert_eq!(set_meal(&state, 2, MealType::Lunch, Some(4)), state);
        let empty = BookingState::default();
        assert_eq!(set_hotel(&empty, 0, Some(101)), empty);
    }

    #[test]
    fn test_update_leaves_input_untouched() {
        let state = with_days(2);
        let before = state.clone();
        let _ = set_hotel(&state, 0, Some(101));
        let _ = update(&state, Action::SetBoardType(BoardTypeCode::NB));
        let _ = update(&state, Action::SetDaysCount(0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_same_action_twice_is_idempotent() {
        let base = update(&with_days(2), Action::SetBoardType(BoardTypeCode::HB));
        let actions = vec![
            Action::SetCitizenship("Turkey".to_string()),
            Action::SetDaysCount(4),
            Action::SetDestination(Some("UAE".to_string())),
            Action::SetBoardType(BoardTypeCode::NB),
            Action::SetDayHotel {
                day_index: 1,
                hotel_id: Some(201),
            },
            Action::SetDayMeal {
                day_index: 0,
                meal_type: MealType::Lunch,
                meal_id: Some(9),
            },
        ];
        for action in actions {
            let once = update(&base, action.clone());
            let twice = update(&once, action);
            assert_eq!(once, twice);
        }
    }
}
