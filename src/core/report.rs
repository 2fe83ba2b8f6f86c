//! # Report
//!
//! Presentation-ready views of a booking that don't depend on any UI toolkit.
//! The TUI summary step and the headless replay output both read from here.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::core::pricing::{PLACEHOLDER, PricingResult, board_type_meta, format_amount};
use crate::core::state::BookingState;

/// One labelled line of the configuration summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
    pub helper: Option<String>,
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

pub fn config_summary(state: &BookingState, catalog: &dyn Catalog) -> Vec<SummaryRow> {
    let config = &state.config;
    let board = board_type_meta(config.board_type.code(), catalog);
    let days = if config.days_count == 0 {
        PLACEHOLDER.to_string()
    } else {
        config.days_count.to_string()
    };

    vec![
        SummaryRow {
            label: "Citizenship",
            value: or_placeholder(&config.citizenship),
            helper: None,
        },
        SummaryRow {
            label: "Start date",
            value: or_placeholder(&config.start_date),
            helper: None,
        },
        SummaryRow {
            label: "Number of days",
            value: days,
            helper: None,
        },
        SummaryRow {
            label: "Destination country",
            value: or_placeholder(config.destination.as_deref().unwrap_or_default()),
            helper: None,
        },
        SummaryRow {
            label: "Board type",
            value: format!("{} ({})", board.name, config.board_type),
            helper: (!board.description.is_empty()).then_some(board.description),
        },
    ]
}

/// Whether there is anything to show in the per-day breakdown.
pub fn has_breakdown(state: &BookingState, pricing: &PricingResult) -> bool {
    state.config.days_count > 0 && state.config.destination.is_some() && !pricing.days.is_empty()
}

/// Plain-text rendering of all three summary sections.
pub fn render_text(state: &BookingState, pricing: &PricingResult, catalog: &dyn Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "1. Configuration summary");
    for row in config_summary(state, catalog) {
        let _ = write!(out, "  {:<20} {}", format!("{}:", row.label), row.value);
        if let Some(helper) = row.helper {
            let _ = write!(out, " - {helper}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\n2. Daily selections");
    if has_breakdown(state, pricing) {
        for day in &pricing.days {
            let _ = writeln!(
                out,
                "  Day {:<3} {} | {} | {} | {}",
                day.day_index + 1,
                day.hotel_label,
                day.lunch_label,
                day.dinner_label,
                format_amount(day.total_for_day)
            );
        }
    } else {
        let _ = writeln!(out, "  No days configured with a destination.");
    }

    let _ = writeln!(out, "\n3. Total price");
    let _ = writeln!(
        out,
        "  Grand total for the entire trip: {}",
        format_amount(pricing.grand_total)
    );
    out
}
