//! # Daily Table Component
//!
//! Step 2: one row per day with hotel, lunch and dinner cells.
//! ↑/↓ picks the day, ←/→ the column, Enter/Space steps through the options
//! for the selected cell and Backspace/Delete clears it.
//!
//! Meal cells are disabled under NB, and under HB once the other meal of the
//! same day is taken. The reducer enforces the same rules; disabling here just
//! keeps the table honest about what a keypress will do.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Padding, Paragraph, Row, Table, TableState, Wrap};

use crate::catalog::{Catalog, find_meal};
use crate::core::action::Action;
use crate::core::state::{App, BoardTypeCode, DaySelection, MealType};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayColumn {
    Hotel,
    Lunch,
    Dinner,
}

impl DayColumn {
    fn left(&self) -> Self {
        match self {
            DayColumn::Hotel | DayColumn::Lunch => DayColumn::Hotel,
            DayColumn::Dinner => DayColumn::Lunch,
        }
    }

    fn right(&self) -> Self {
        match self {
            DayColumn::Hotel => DayColumn::Lunch,
            DayColumn::Lunch | DayColumn::Dinner => DayColumn::Dinner,
        }
    }

    fn meal_type(&self) -> Option<MealType> {
        match self {
            DayColumn::Hotel => None,
            DayColumn::Lunch => Some(MealType::Lunch),
            DayColumn::Dinner => Some(MealType::Dinner),
        }
    }
}

/// Whether a meal cell accepts input for this day under `board`.
pub fn meal_disabled(board: BoardTypeCode, day: &DaySelection, meal_type: MealType) -> bool {
    match board {
        BoardTypeCode::NB => true,
        BoardTypeCode::HB => match meal_type {
            MealType::Lunch => day.dinner_id.is_some(),
            MealType::Dinner => day.lunch_id.is_some(),
        },
        BoardTypeCode::FB => false,
    }
}

/// Step `None → first → … → last → None`. An id that isn't offered restarts at the first.
fn next_option(ids: &[u32], current: Option<u32>) -> Option<u32> {
    match current.and_then(|id| ids.iter().position(|&i| i == id)) {
        Some(pos) => ids.get(pos + 1).copied(),
        None => ids.first().copied(),
    }
}

/// Persistent state for the daily table.
pub struct DailyTableState {
    pub row: usize,
    pub column: DayColumn,
    pub table_state: TableState,
}

impl DailyTableState {
    pub fn new() -> Self {
        Self {
            row: 0,
            column: DayColumn::Hotel,
            table_state: TableState::default(),
        }
    }

    /// Keep the selected row inside the day list; it can shrink under us.
    fn clamp_row(&mut self, days: usize) {
        self.row = self.row.min(days.saturating_sub(1));
    }

    fn cycle(&self, app: &App, destination: &str, day: &DaySelection) -> Option<Action> {
        let catalog = app.catalog.as_ref();
        match self.column.meal_type() {
            None => {
                let ids: Vec<u32> = catalog
                    .hotels_for(destination)
                    .unwrap_or_default()
                    .iter()
                    .map(|h| h.id)
                    .collect();
                Some(Action::SetDayHotel {
                    day_index: day.day_index,
                    hotel_id: next_option(&ids, day.hotel_id),
                })
            }
            Some(meal_type) => {
                if meal_disabled(app.booking.config.board_type, day, meal_type) {
                    return None;
                }
                let menu = catalog.meals_for(destination)?;
                let meals = match meal_type {
                    MealType::Lunch => &menu.lunch,
                    MealType::Dinner => &menu.dinner,
                };
                let ids: Vec<u32> = meals.iter().map(|m| m.id).collect();
                Some(Action::SetDayMeal {
                    day_index: day.day_index,
                    meal_type,
                    meal_id: next_option(&ids, day.meal(meal_type)),
                })
            }
        }
    }

    fn clear(&self, app: &App, day: &DaySelection) -> Option<Action> {
        match self.column.meal_type() {
            None => Some(Action::SetDayHotel {
                day_index: day.day_index,
                hotel_id: None,
            }),
            Some(meal_type) => {
                if meal_disabled(app.booking.config.board_type, day, meal_type) {
                    return None;
                }
                Some(Action::SetDayMeal {
                    day_index: day.day_index,
                    meal_type,
                    meal_id: None,
                })
            }
        }
    }
}

impl Default for DailyTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for DailyTableState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        let days = &app.booking.days;
        let destination = app.booking.config.destination.as_deref()?;
        if days.is_empty() {
            return None;
        }
        self.clamp_row(days.len());

        match event {
            TuiEvent::CursorUp => {
                self.row = self.row.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.row = (self.row + 1).min(days.len() - 1);
                None
            }
            TuiEvent::CursorLeft => {
                self.column = self.column.left();
                None
            }
            TuiEvent::CursorRight => {
                self.column = self.column.right();
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                self.cycle(app, destination, &days[self.row])
            }
            TuiEvent::Backspace | TuiEvent::Delete => self.clear(app, &days[self.row]),
            _ => None,
        }
    }
}

/// Transient render wrapper for the daily table.
pub struct DailyTable<'a> {
    state: &'a mut DailyTableState,
    app: &'a App,
}

impl<'a> DailyTable<'a> {
    pub fn new(state: &'a mut DailyTableState, app: &'a App) -> Self {
        Self { state, app }
    }

    fn hotel_label(catalog: &dyn Catalog, destination: &str, day: &DaySelection) -> String {
        day.hotel_id
            .and_then(|id| catalog.find_hotel(destination, id))
            .map(|h| format!("{} (${})", h.name, h.price))
            .unwrap_or_else(|| "Select hotel".to_string())
    }

    fn meal_label(
        catalog: &dyn Catalog,
        destination: &str,
        board: BoardTypeCode,
        day: &DaySelection,
        meal_type: MealType,
    ) -> String {
        let resolved = day.meal(meal_type).and_then(|id| {
            let menu = catalog.meals_for(destination)?;
            match meal_type {
                MealType::Lunch => find_meal(&menu.lunch, id),
                MealType::Dinner => find_meal(&menu.dinner, id),
            }
        });
        match resolved {
            Some(meal) => format!("{} (${})", meal.name, meal.price),
            None if board == BoardTypeCode::NB => "No meals for NB".to_string(),
            None => match meal_type {
                MealType::Lunch => "Select lunch".to_string(),
                MealType::Dinner => "Select dinner".to_string(),
            },
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, message: &str) {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block(None));
        frame.render_widget(paragraph, area);
    }
}

fn block(board: Option<BoardTypeCode>) -> Block<'static> {
    let mut block = Block::bordered()
        .title(" Step 2 – Daily configuration ")
        .padding(Padding::horizontal(1));
    if let Some(board) = board {
        block = block.title(Line::from(format!(" Board type: {board} ")).right_aligned());
    }
    block
}

impl Component for DailyTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let config = &self.app.booking.config;
        let days = &self.app.booking.days;

        if config.days_count == 0 {
            Self::render_message(
                frame,
                area,
                "Please select the number of days in Step 1. A row will be generated for each day.",
            );
            return;
        }
        let Some(destination) = config.destination.as_deref() else {
            Self::render_message(
                frame,
                area,
                "Please select a destination country in Step 1 to configure hotels and meals.",
            );
            return;
        };

        self.state.clamp_row(days.len());
        let catalog = self.app.catalog.as_ref();
        let board = config.board_type;
        let selected = Style::default().add_modifier(Modifier::REVERSED);
        let disabled = Style::default().fg(Color::DarkGray);

        let rows: Vec<Row> = days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let cell_style = |column: DayColumn| {
                    let is_disabled = column
                        .meal_type()
                        .is_some_and(|m| meal_disabled(board, day, m));
                    let base = if is_disabled {
                        disabled
                    } else {
                        Style::default()
                    };
                    if i == self.state.row && column == self.state.column {
                        base.patch(selected)
                    } else {
                        base
                    }
                };
                Row::new(vec![
                    Cell::from(format!("Day {}", day.day_index + 1)),
                    Cell::from(Self::hotel_label(catalog, destination, day))
                        .style(cell_style(DayColumn::Hotel)),
                    Cell::from(Self::meal_label(catalog, destination, board, day, MealType::Lunch))
                        .style(cell_style(DayColumn::Lunch)),
                    Cell::from(Self::meal_label(catalog, destination, board, day, MealType::Dinner))
                        .style(cell_style(DayColumn::Dinner)),
                ])
            })
            .collect();

        let header = Row::new(vec!["Day", "Hotel", "Lunch", "Dinner"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .column_spacing(2);

        let outer = block(Some(board));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [table_area, notes_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        self.state.table_state.select(Some(self.state.row));
        frame.render_stateful_widget(table, table_area, &mut self.state.table_state);

        let notes = Paragraph::new(vec![
            Line::from("• FB: both lunch and dinner can be selected."),
            Line::from("• HB: only lunch or dinner can be selected per day."),
            Line::from("• NB: meal selection is disabled."),
        ])
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(notes, notes_area);
    }
}
