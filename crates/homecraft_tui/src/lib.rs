//! Terminal User Interface for the Homecraft catalog.
//!
//! Provides an interactive TUI for browsing, searching, adding, editing, and
//! deleting catalog products, with a read-only PokeAPI reference panel.
//! Built with ratatui for terminal rendering.

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, AppMode, FormBuffer, ReferencePanel};
pub use events::{Event, EventHandler};
pub use homecraft_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
