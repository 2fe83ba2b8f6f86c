//! # TitleBar Component
//!
//! Top status bar: application name, the three step tabs with the active one
//! highlighted, and the current status message.
//!
//! Purely presentational. It receives everything as props and holds no state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(tui.step, app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::Step;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Step currently shown
    pub step: Step,
    /// Status message (e.g. "Step 2: hotels and meals per day")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(step: Step, status_message: String) -> Self {
        Self {
            step,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Hotel Booking System ",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        for step in Step::ALL {
            let label = format!(" {}. {} ", step.number(), step.title());
            let style = if step == self.step {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
