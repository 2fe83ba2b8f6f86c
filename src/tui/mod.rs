//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the wizard,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The replay path in `main` is the other adapter over the same core.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event. All pending events are drained before the next
//! frame so a burst of keys costs one draw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;

use crate::catalog::Catalog;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DailyTableState, InspectorEvent, StateInspectorState, TripFormState};
use crate::tui::event::{TuiEvent, drain_pending, poll_event_timeout};

/// The three wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Trip,
    Daily,
    Summary,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Trip, Step::Daily, Step::Summary];

    pub fn number(&self) -> u8 {
        match self {
            Step::Trip => 1,
            Step::Daily => 2,
            Step::Summary => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Trip => "Trip",
            Step::Daily => "Daily",
            Step::Summary => "Summary",
        }
    }

    /// Status bar text shown when the step is entered.
    pub fn status(&self) -> &'static str {
        match self {
            Step::Trip => "Step 1: configure your trip",
            Step::Daily => "Step 2: choose hotels and meals for each day",
            Step::Summary => "Step 3: review your booking",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Step::Trip => Step::Daily,
            Step::Daily | Step::Summary => Step::Summary,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Step::Trip | Step::Daily => Step::Trip,
            Step::Summary => Step::Daily,
        }
    }
}

/// TUI-specific presentation state (not part of the booking)
pub struct TuiState {
    pub step: Step,
    // Persistent component states
    pub trip_form: TripFormState,
    pub daily_table: DailyTableState,
    // State inspector overlay (None = hidden)
    pub inspector: Option<StateInspectorState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            step: Step::Trip,
            trip_form: TripFormState::new(),
            daily_table: DailyTableState::new(),
            inspector: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Hide);
    }
}

fn go_to(app: &mut App, tui: &mut TuiState, step: Step) {
    if tui.step != step {
        debug!("Step change: {:?} -> {:?}", tui.step, step);
        tui.step = step;
    }
    app.status_message = step.status().to_string();
}

/// Apply one input event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        // Ctrl+C always quits, overlay or not
        TuiEvent::ForceQuit => return true,
        _ => {}
    }

    // When the inspector is open, route all events to it
    if let Some(inspector) = tui.inspector.as_mut() {
        if let Some(InspectorEvent::Dismiss) = inspector.handle_event(&event, app) {
            tui.inspector = None;
        }
        return false;
    }

    match event {
        TuiEvent::ToggleInspector => {
            tui.inspector = Some(StateInspectorState::new());
            false
        }
        TuiEvent::Escape => true,
        TuiEvent::NextStep => {
            let step = tui.step.next();
            go_to(app, tui, step);
            false
        }
        TuiEvent::PrevStep => {
            let step = tui.step.prev();
            go_to(app, tui, step);
            false
        }
        other => {
            let action = match tui.step {
                Step::Trip => tui.trip_form.handle_event(&other, app),
                Step::Daily => tui.daily_table.handle_event(&other, app),
                Step::Summary => None,
            };
            if let Some(action) = action {
                app.dispatch(action);
            }
            false
        }
    }
}

pub fn run(catalog: Arc<dyn Catalog>) -> std::io::Result<()> {
    let mut app = App::new(catalog);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        // Only draw when something changed
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(Duration::from_millis(500)) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        let pending = match drain_pending() {
            Ok(events) => events,
            Err(e) => break Err(e),
        };
        let mut should_quit = false;
        if first_event.is_some() || !pending.is_empty() {
            needs_redraw = true;
        }
        for event in first_event.into_iter().chain(pending) {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Leaving TUI with {} configured day(s)", app.booking.days.len());
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::state::BoardTypeCode;
    use crate::test_support::test_app;

    fn feed(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        events
            .iter()
            .any(|event| handle_event(app, tui, event.clone()))
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        feed(&mut app, &mut tui, &[TuiEvent::PrevStep]);
        assert_eq!(tui.step, Step::Trip);
        feed(&mut app, &mut tui, &[TuiEvent::NextStep, TuiEvent::NextStep, TuiEvent::NextStep]);
        assert_eq!(tui.step, Step::Summary);
        assert_eq!(app.status_message, Step::Summary.status());
        feed(&mut app, &mut tui, &[TuiEvent::PrevStep]);
        assert_eq!(tui.step, Step::Daily);
    }

    #[test]
    fn test_escape_quits_unless_inspector_open() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        assert!(!handle_event(&mut app, &mut tui, TuiEvent::ToggleInspector));
        assert!(tui.inspector.is_some());
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert!(tui.inspector.is_none());
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Escape));
    }

    #[test]
    fn test_force_quit_through_inspector() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.inspector = Some(StateInspectorState::new());
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn test_inspector_swallows_step_input() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.inspector = Some(StateInspectorState::new());
        feed(&mut app, &mut tui, &[TuiEvent::InputChar('X'), TuiEvent::NextStep]);
        assert_eq!(app.booking.config.citizenship, "");
        assert_eq!(tui.step, Step::Trip);
    }

    #[test]
    fn test_keyboard_session_builds_booking() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // Citizenship
        feed(&mut app, &mut tui, &[TuiEvent::InputChar('A'), TuiEvent::InputChar('Z')]);
        // Start date, then days
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorDown]);
        feed(&mut app, &mut tui, &[TuiEvent::InputChar('2')]);
        // Destination
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorRight]);
        // Board type FB -> HB
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorRight]);

        assert_eq!(app.booking.config.citizenship, "AZ");
        assert_eq!(app.booking.config.days_count, 2);
        assert_eq!(app.booking.config.destination.as_deref(), Some("Testland"));
        assert_eq!(app.booking.config.board_type, BoardTypeCode::HB);

        // Day 1: hotel and lunch; dinner is then locked under HB
        feed(
            &mut app,
            &mut tui,
            &[
                TuiEvent::NextStep,
                TuiEvent::Submit,
                TuiEvent::CursorRight,
                TuiEvent::Submit,
                TuiEvent::CursorRight,
                TuiEvent::Submit,
            ],
        );
        let day = &app.booking.days[0];
        assert_eq!(day.hotel_id, Some(1));
        assert_eq!(day.lunch_id, Some(2));
        assert_eq!(day.dinner_id, None);
        assert_eq!(app.pricing().grand_total, 80.5 + 7.25);
    }

    #[test]
    fn test_summary_step_ignores_input() {
        let mut app = test_app();
        app.dispatch(Action::SetDaysCount(1));
        let before = app.booking.clone();
        let mut tui = TuiState::new();
        tui.step = Step::Summary;
        feed(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::InputChar('x')]);
        assert_eq!(app.booking, before);
    }
}
