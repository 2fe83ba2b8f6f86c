//! # State Inspector Component
//!
//! Overlay showing the current `BookingState` as pretty-printed JSON.
//! Toggled with Ctrl+D. Read-only: it never emits actions.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StateInspectorState` lives in `TuiState` while the overlay is open
//! - `StateInspector` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::state::{App, BookingState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PAGE: u16 = 10;

/// Persistent state for the inspector overlay.
#[derive(Debug, Default)]
pub struct StateInspectorState {
    pub scroll: u16,
}

impl StateInspectorState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events emitted by the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorEvent {
    Dismiss,
}

impl EventHandler for StateInspectorState {
    type Event = InspectorEvent;

    fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<InspectorEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleInspector => Some(InspectorEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll = self.scroll.saturating_add(PAGE);
                None
            }
            _ => None,
        }
    }
}

fn state_json(booking: &BookingState) -> String {
    serde_json::to_string_pretty(booking).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Transient render wrapper for the inspector overlay.
pub struct StateInspector<'a> {
    state: &'a mut StateInspectorState,
    booking: &'a BookingState,
}

impl<'a> StateInspector<'a> {
    pub fn new(state: &'a mut StateInspectorState, booking: &'a BookingState) -> Self {
        Self { state, booking }
    }
}

impl Component for StateInspector<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let json = state_json(self.booking);
        let lines: Vec<Line> = json.lines().map(Line::from).collect();

        // Don't scroll past the last line
        let visible = overlay.height.saturating_sub(2);
        let max_scroll = (lines.len() as u16).saturating_sub(visible);
        self.state.scroll = self.state.scroll.min(max_scroll);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Booking state ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc/Ctrl+D Close ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .scroll((self.state.scroll, 0))
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
