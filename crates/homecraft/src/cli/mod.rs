//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the homecraft binary.

mod catalog;
mod commands;
mod pokedex;
mod tui_handler;

pub use catalog::{handle_add, handle_edit, handle_list, handle_remove, handle_show};
pub use commands::{Cli, Commands, OutputFormat};
pub use pokedex::handle_pokedex;
pub use tui_handler::launch_tui;
