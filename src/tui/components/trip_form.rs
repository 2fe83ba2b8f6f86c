//! # Trip Form Component
//!
//! Step 1: the trip-level fields. Each keystroke dispatches an action, so
//! the form holds no copy of the values. It only tracks which field has focus.
//!
//! ## Fields
//!
//! - Citizenship, Start date: free text, appended/trimmed at the end
//! - Number of days: digits only, parsed like a number input (`"3a"` → 3, `""` → 0)
//! - Destination: ←/→ cycles through catalog countries and "unset"
//! - Board type: ←/→ cycles FB → HB → NB
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TripFormState` lives in `TuiState`
//! - `TripForm` is created each frame with borrowed state

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::pricing::board_type_meta;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Longest day count the form accepts, in digits.
const MAX_DAY_DIGITS: usize = 3;
const LABEL_WIDTH: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    Citizenship,
    StartDate,
    DaysCount,
    Destination,
    BoardType,
}

impl TripField {
    pub const ALL: [TripField; 5] = [
        TripField::Citizenship,
        TripField::StartDate,
        TripField::DaysCount,
        TripField::Destination,
        TripField::BoardType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TripField::Citizenship => "Citizenship",
            TripField::StartDate => "Start date",
            TripField::DaysCount => "Number of days",
            TripField::Destination => "Destination country",
            TripField::BoardType => "Board type",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.position() + 1).min(Self::ALL.len() - 1)]
    }

    fn prev(&self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }

    fn is_text(&self) -> bool {
        matches!(
            self,
            TripField::Citizenship | TripField::StartDate | TripField::DaysCount
        )
    }
}

/// Persistent state for the trip form.
pub struct TripFormState {
    pub focused: TripField,
}

impl TripFormState {
    pub fn new() -> Self {
        Self {
            focused: TripField::Citizenship,
        }
    }
}

impl Default for TripFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-integer parse: optional sign then digits; anything else is 0.
pub fn parse_days(text: &str) -> i64 {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// What the days field shows: empty for zero, like an unset number input.
fn days_text(days_count: usize) -> String {
    if days_count == 0 {
        String::new()
    } else {
        days_count.to_string()
    }
}

fn is_valid_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Step through `[None, Some(a), Some(b), ...]`, wrapping at both ends.
fn cycle_destination(names: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    let mut options: Vec<Option<&str>> = vec![None];
    options.extend(names.iter().map(|n| Some(n.as_str())));
    let pos = options.iter().position(|o| *o == current).unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    options[next].map(str::to_string)
}

impl EventHandler for TripFormState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        let config = &app.booking.config;
        match event {
            TuiEvent::CursorUp => {
                self.focused = self.focused.prev();
                None
            }
            TuiEvent::CursorDown | TuiEvent::Submit if self.focused != TripField::Destination => {
                self.focused = self.focused.next();
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Submit => {
                let forward = !matches!(event, TuiEvent::CursorLeft);
                match self.focused {
                    TripField::Destination => {
                        let names: Vec<String> =
                            app.catalog.countries().into_iter().map(|c| c.name).collect();
                        Some(Action::SetDestination(cycle_destination(
                            &names,
                            config.destination.as_deref(),
                            forward,
                        )))
                    }
                    TripField::BoardType => Some(Action::SetBoardType(if forward {
                        config.board_type.next()
                    } else {
                        config.board_type.prev()
                    })),
                    _ => None,
                }
            }
            TuiEvent::CursorDown => {
                self.focused = self.focused.next();
                None
            }
            TuiEvent::InputChar(c) => match self.focused {
                TripField::Citizenship => {
                    Some(Action::SetCitizenship(format!("{}{c}", config.citizenship)))
                }
                TripField::StartDate => {
                    Some(Action::SetStartDate(format!("{}{c}", config.start_date)))
                }
                TripField::DaysCount => {
                    let current = days_text(config.days_count);
                    if current.len() >= MAX_DAY_DIGITS {
                        return None;
                    }
                    Some(Action::SetDaysCount(parse_days(&format!("{current}{c}"))))
                }
                _ => None,
            },
            TuiEvent::Backspace => match self.focused {
                TripField::Citizenship => {
                    let mut text = config.citizenship.clone();
                    text.pop().map(|_| Action::SetCitizenship(text))
                }
                TripField::StartDate => {
                    let mut text = config.start_date.clone();
                    text.pop().map(|_| Action::SetStartDate(text))
                }
                TripField::DaysCount => {
                    let mut text = days_text(config.days_count);
                    text.pop().map(|_| Action::SetDaysCount(parse_days(&text)))
                }
                _ => None,
            },
            TuiEvent::Delete => match self.focused {
                TripField::Citizenship => Some(Action::SetCitizenship(String::new())),
                TripField::StartDate => Some(Action::SetStartDate(String::new())),
                TripField::DaysCount => Some(Action::SetDaysCount(0)),
                TripField::Destination => Some(Action::SetDestination(None)),
                TripField::BoardType => None,
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the trip form.
pub struct TripForm<'a> {
    state: &'a TripFormState,
    app: &'a App,
}

impl<'a> TripForm<'a> {
    pub fn new(state: &'a TripFormState, app: &'a App) -> Self {
        Self { state, app }
    }

    fn value(&self, field: TripField) -> String {
        let config = &self.app.booking.config;
        match field {
            TripField::Citizenship => config.citizenship.clone(),
            TripField::StartDate => config.start_date.clone(),
            TripField::DaysCount => days_text(config.days_count),
            TripField::Destination => match &config.destination {
                Some(name) => format!("‹ {name} ›"),
                None => "‹ Select a country ›".to_string(),
            },
            TripField::BoardType => {
                let meta = board_type_meta(config.board_type.code(), self.app.catalog.as_ref());
                format!("‹ {} ({}) ›", meta.name, config.board_type)
            }
        }
    }

    /// Greyed-out line shown under a field, if any.
    fn hint(&self, field: TripField) -> Option<(String, Color)> {
        let config = &self.app.booking.config;
        match field {
            TripField::Citizenship if config.citizenship.is_empty() => {
                Some(("Azerbaijan, Turkey, etc.".to_string(), Color::DarkGray))
            }
            TripField::StartDate if config.start_date.is_empty() => {
                Some(("YYYY-MM-DD".to_string(), Color::DarkGray))
            }
            TripField::StartDate if !is_valid_date(&config.start_date) => {
                Some(("Not a valid YYYY-MM-DD date".to_string(), Color::Yellow))
            }
            TripField::DaysCount => Some((
                "Each day will appear as a row in the daily configuration table.".to_string(),
                Color::DarkGray,
            )),
            TripField::BoardType => {
                let meta = board_type_meta(config.board_type.code(), self.app.catalog.as_ref());
                (!meta.description.is_empty()).then_some((meta.description, Color::DarkGray))
            }
            _ => None,
        }
    }
}

impl Component for TripForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Step 1 – Trip configuration ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let mut lines = Vec::new();
        let mut cursor = None;

        for field in TripField::ALL {
            let focused = field == self.state.focused;
            let value = self.value(field);
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value_style = if field.is_text() {
                Style::default()
            } else if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };

            if focused && field.is_text() {
                let x = inner.x + (LABEL_WIDTH + value.width()) as u16;
                let y = inner.y + lines.len() as u16;
                cursor = Some(Position::new(x, y));
            }

            lines.push(Line::from(vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                Span::styled(value, value_style),
            ]));

            if let Some((hint, color)) = self.hint(field) {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH)),
                    Span::styled(hint, Style::default().fg(color)),
                ]));
            }
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(position) = cursor
            && inner.contains(position)
        {
            frame.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::BoardTypeCode;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn focused_on(field: TripField) -> TripFormState {
        TripFormState { focused: field }
    }

    fn type_text(form: &mut TripFormState, app: &mut App, text: &str) {
        for c in text.chars() {
            if let Some(action) = form.handle_event(&TuiEvent::InputChar(c), app) {
                app.dispatch(action);
            }
        }
    }

    #[test]
    fn test_parse_days_like_number_input() {
        assert_eq!(parse_days("3"), 3);
        assert_eq!(parse_days("12"), 12);
        assert_eq!(parse_days("3a"), 3);
        assert_eq!(parse_days("abc"), 0);
        assert_eq!(parse_days(""), 0);
        assert_eq!(parse_days("-4"), -4);
    }

    #[test]
    fn test_focus_moves_and_clamps() {
        let mut app = test_app();
        let mut form = TripFormState::new();
        assert_eq!(form.handle_event(&TuiEvent::CursorUp, &app), None);
        assert_eq!(form.focused, TripField::Citizenship);
        for _ in 0..10 {
            form.handle_event(&TuiEvent::CursorDown, &app);
        }
        assert_eq!(form.focused, TripField::BoardType);
        app.dispatch(Action::SetCitizenship("x".into()));
        assert_eq!(form.focused, TripField::BoardType);
    }

    #[test]
    fn test_typing_citizenship_and_backspace() {
        let mut app = test_app();
        let mut form = focused_on(TripField::Citizenship);
        type_text(&mut form, &mut app, "Azerbaijan");
        assert_eq!(app.booking.config.citizenship, "Azerbaijan");
        let action = form.handle_event(&TuiEvent::Backspace, &app).unwrap();
        app.dispatch(action);
        assert_eq!(app.booking.config.citizenship, "Azerbaija");
    }

    #[test]
    fn test_backspace_on_empty_field_emits_nothing() {
        let app = test_app();
        let mut form = focused_on(TripField::StartDate);
        assert_eq!(form.handle_event(&TuiEvent::Backspace, &app), None);
    }

    #[test]
    fn test_typing_days_resizes_list() {
        let mut app = test_app();
        let mut form = focused_on(TripField::DaysCount);
        type_text(&mut form, &mut app, "12");
        assert_eq!(app.booking.config.days_count, 12);
        assert_eq!(app.booking.days.len(), 12);

        // Non-digit keeps the leading number
        type_text(&mut form, &mut app, "x");
        assert_eq!(app.booking.config.days_count, 12);

        let action = form.handle_event(&TuiEvent::Backspace, &app).unwrap();
        app.dispatch(action);
        assert_eq!(app.booking.days.len(), 1);
    }

    #[test]
    fn test_leading_non_digit_gives_zero_days() {
        let mut app = test_app();
        let mut form = focused_on(TripField::DaysCount);
        type_text(&mut form, &mut app, "a");
        assert_eq!(app.booking.config.days_count, 0);
    }

    #[test]
    fn test_days_input_is_capped() {
        let mut app = test_app();
        let mut form = focused_on(TripField::DaysCount);
        type_text(&mut form, &mut app, "12345");
        assert_eq!(app.booking.config.days_count, 123);
    }

    #[test]
    fn test_destination_cycles_through_unset() {
        let mut app = test_app();
        let mut form = focused_on(TripField::Destination);
        let action = form.handle_event(&TuiEvent::CursorRight, &app).unwrap();
        assert_eq!(action, Action::SetDestination(Some("Testland".into())));
        app.dispatch(action);
        let action = form.handle_event(&TuiEvent::CursorRight, &app).unwrap();
        assert_eq!(action, Action::SetDestination(None));
        let action = form.handle_event(&TuiEvent::CursorLeft, &app).unwrap();
        assert_eq!(action, Action::SetDestination(None));
    }

    #[test]
    fn test_cycle_destination_wraps_backwards() {
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(cycle_destination(&names, None, false), Some("B".to_string()));
        assert_eq!(cycle_destination(&names, Some("A"), false), None);
        // Unknown current restarts from the top
        assert_eq!(cycle_destination(&names, Some("Z"), true), Some("A".to_string()));
    }

    #[test]
    fn test_board_type_cycles() {
        let mut app = test_app();
        let mut form = focused_on(TripField::BoardType);
        let action = form.handle_event(&TuiEvent::CursorRight, &app).unwrap();
        assert_eq!(action, Action::SetBoardType(BoardTypeCode::HB));
        app.dispatch(action);
        let action = form.handle_event(&TuiEvent::CursorLeft, &app).unwrap();
        assert_eq!(action, Action::SetBoardType(BoardTypeCode::FB));
    }

    #[test]
    fn test_date_validation_hint() {
        assert!(is_valid_date("2025-11-20"));
        assert!(!is_valid_date("2025-13-01"));
        assert!(!is_valid_date("tomorrow"));
    }

    #[test]
    fn test_render_shows_fields_and_hints() {
        let mut app = test_app();
        app.dispatch(Action::SetStartDate("2025-99-01".into()));
        app.dispatch(Action::SetDestination(Some("Testland".into())));
        let state = TripFormState::new();

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TripForm::new(&state, &app).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Trip configuration"));
        assert!(text.contains("Citizenship"));
        assert!(text.contains("Not a valid YYYY-MM-DD date"));
        assert!(text.contains("Testland"));
        assert!(text.contains("Full Board (FB)"));
        assert!(text.contains("Breakfast, lunch and dinner included"));
    }
}
