//! Read-only PokéAPI client for the Homecraft reference panel.
//!
//! The reference panel shows two resources fetched once at startup: the first
//! page of the pokemon listing, and the effect descriptions of a single
//! ability. Both requests are independent and are issued concurrently.
//!
//! # Example
//!
//! ```rust
//! use homecraft_pokeapi::{PokedexClient, PokedexConfig};
//!
//! # async fn example() -> Result<(), homecraft_error::PokedexError> {
//! let client = PokedexClient::new(PokedexConfig::default());
//! let data = client.reference_data().await?;
//!
//! for pokemon in data.pokemon().results() {
//!     println!("{}", pokemon.name());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod models;

pub use client::PokedexClient;
pub use config::PokedexConfig;
pub use homecraft_error::{PokedexError, PokedexErrorKind, PokedexResult};
pub use models::{Ability, EffectEntry, NamedResource, ReferenceData, ResourceListPage};
