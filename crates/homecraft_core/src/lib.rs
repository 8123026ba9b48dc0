//! Core data types for the Homecraft catalog manager.
//!
//! This crate provides the foundation data types shared by the store, the
//! terminal UI, and the CLI: the [`Product`] record, the [`ProductDraft`]
//! submission payload, field-level form validation, and display helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod display;
mod product;
mod validation;

pub use display::{format_price, preview, stars};
pub use product::{Product, ProductDraft, ProductDraftBuilder, ProductId};
pub use validation::{FieldViolation, FormField, validate_draft};
