//! # Core Application Logic
//!
//! This module contains the booking business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (booking)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • compute_pricing()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Replay   │
//!     │  Adapter   │                          │ (headless) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `BookingState` and the `App` holder
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`pricing`]: Per-day and grand totals
//! - [`report`]: Toolkit-independent summary views
//! - [`replay`]: Apply a JSON-lines action log
//! - [`config`]: Settings and their override order

pub mod action;
pub mod config;
pub mod pricing;
pub mod replay;
pub mod report;
pub mod state;
