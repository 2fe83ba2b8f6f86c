//! # TUI Components
//!
//! All UI pieces of the booking wizard.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, step tabs and status message
//! - `Summary`: Step 3, reads the booking and a freshly computed `PricingResult`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! one frame. The state types implement `EventHandler` and emit
//! `core::Action` values for the main loop to dispatch.
//!
//! - `TripFormState` / `TripForm`: Step 1 fields
//! - `DailyTableState` / `DailyTable`: Step 2 per-day selections
//! - `StateInspectorState` / `StateInspector`: Ctrl+D JSON overlay
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── trip_form.rs        (Step 1)
//! ├── daily_table.rs      (Step 2)
//! ├── summary.rs          (Step 3)
//! └── state_inspector.rs  (Debug overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod daily_table;
pub mod state_inspector;
pub mod summary;
pub mod trip_form;
pub use daily_table::{DailyTable, DailyTableState};
pub use state_inspector::{InspectorEvent, StateInspector, StateInspectorState};
pub use summary::Summary;
pub use trip_form::{TripForm, TripFormState};
