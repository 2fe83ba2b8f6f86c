use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DailyTable, StateInspector, Summary, TitleBar, TripForm};
use crate::tui::{Step, TuiState};

fn help_text(step: Step) -> &'static str {
    match step {
        Step::Trip => " ↑↓ Field  ←→ Choose  Tab Next step  Ctrl+D State  Esc Quit",
        Step::Daily => {
            " ↑↓ Day  ←→ Column  Enter/Space Cycle  Del Clear  Tab Next step  Ctrl+D State  Esc Quit"
        }
        Step::Summary => " Shift+Tab Previous step  Ctrl+D State  Esc Quit",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(tui.step, app.status_message.clone()).render(frame, title_area);

    match tui.step {
        Step::Trip => TripForm::new(&tui.trip_form, app).render(frame, main_area),
        Step::Daily => DailyTable::new(&mut tui.daily_table, app).render(frame, main_area),
        Step::Summary => {
            // Derived on every frame, never stored
            let pricing = app.pricing();
            Summary::new(app, &pricing).render(frame, main_area);
        }
    }

    frame.render_widget(
        Span::styled(help_text(tui.step), Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(inspector) = tui.inspector.as_mut() {
        StateInspector::new(inspector, &app.booking).render(frame, frame.area());
    }
}
