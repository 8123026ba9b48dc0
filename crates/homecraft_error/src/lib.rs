//! Error types for the Homecraft catalog manager.
//!
//! This crate provides the foundation error types used throughout the Homecraft
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use homecraft_error::{HomecraftResult, StorageError, StorageErrorKind};
//!
//! fn load_catalog() -> HomecraftResult<String> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("products".to_string())))?
//! }
//!
//! match load_catalog() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod pokedex;
mod storage;
mod tui;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{HomecraftError, HomecraftErrorKind, HomecraftResult};
pub use json::{JsonError, JsonErrorKind};
pub use pokedex::{PokedexError, PokedexErrorKind, PokedexResult};
pub use storage::{StorageError, StorageErrorKind};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use validation::ValidationError;
