//! Homecraft - Product Catalog Manager
//!
//! Homecraft manages a small product catalog persisted to a filesystem blob
//! store, with full-screen terminal browsing and editing plus a read-only
//! PokeAPI reference panel.
//!
//! # Architecture
//!
//! Homecraft is organized as a workspace with focused crates:
//!
//! - `homecraft_core` - Product types, validation, display helpers
//! - `homecraft_error` - Error types
//! - `homecraft_store` - Catalog state over a persistent blob store
//! - `homecraft_pokeapi` - PokeAPI reference client
//! - `homecraft_tui` - Terminal UI
//!
//! This crate (`homecraft`) re-exports everything for convenience and adds
//! the layered [`HomecraftConfig`].

#![forbid(unsafe_code)]

pub use homecraft_core::*;
pub use homecraft_error::*;
pub use homecraft_pokeapi::*;
pub use homecraft_store::*;
pub use homecraft_tui::*;

mod config;

pub use config::HomecraftConfig;
