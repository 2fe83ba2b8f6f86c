//! Step 3: configuration summary, per-day breakdown and the grand total.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Row, Table};

use crate::core::pricing::{PricingResult, format_amount};
use crate::core::report::{config_summary, has_breakdown};
use crate::core::state::App;
use crate::tui::component::Component;

const FORMULA: &str = "Formula: Total = Σ (hotel price + selected meal prices) for each day.";

pub struct Summary<'a> {
    app: &'a App,
    pricing: &'a PricingResult,
}

impl<'a> Summary<'a> {
    pub fn new(app: &'a App, pricing: &'a PricingResult) -> Self {
        Self { app, pricing }
    }

    fn summary_lines(&self) -> Vec<Line<'static>> {
        let label_style = Style::default().fg(Color::Cyan);
        let mut lines = vec![Line::from(Span::styled(
            "1. Configuration summary",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for row in config_summary(&self.app.booking, self.app.catalog.as_ref()) {
            let mut spans = vec![
                Span::styled(format!("{:<22}", format!("{}:", row.label)), label_style),
                Span::raw(row.value),
            ];
            if let Some(helper) = row.helper {
                spans.push(Span::styled(
                    format!("  {helper}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn breakdown_table(&self) -> Table<'static> {
        let rows: Vec<Row> = self
            .pricing
            .days
            .iter()
            .map(|day| {
                Row::new(vec![
                    format!("Day {}", day.day_index + 1),
                    day.hotel_label.clone(),
                    day.lunch_label.clone(),
                    day.dinner_label.clone(),
                    format_amount(day.total_for_day),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec!["Day", "Hotel", "Lunch", "Dinner", "Day total"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .column_spacing(2)
    }

    fn total_lines(&self) -> Vec<Line<'static>> {
        let total = if self.pricing.grand_total > 0.0 {
            Line::from(vec![
                Span::raw("Grand total for the entire trip: "),
                Span::styled(
                    format_amount(self.pricing.grand_total),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Select hotels and meals in Step 2 to see the total price.",
                Style::default().fg(Color::Gray),
            ))
        };
        vec![
            Line::from(Span::styled(
                "3. Total price",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            total,
            Line::from(Span::styled(FORMULA, Style::default().fg(Color::DarkGray))),
        ]
    }
}

impl Component for Summary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Step 3 – Summary ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = self.summary_lines();
        let [summary_area, breakdown_area, total_area] = Layout::vertical([
            Constraint::Length(summary.len() as u16 + 1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(summary), summary_area);

        let [heading_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(breakdown_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "2. Daily selections",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );
        if has_breakdown(&self.app.booking, self.pricing) {
            frame.render_widget(self.breakdown_table(), table_area);
        } else {
            frame.render_widget(
                Paragraph::new("No days configured with a destination.")
                    .style(Style::default().fg(Color::Gray)),
                table_area,
            );
        }

        frame.render_widget(Paragraph::new(self.total_lines()), total_area);
    }
}
