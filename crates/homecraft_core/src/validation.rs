//! Pre-submit validation for product drafts.

use crate::ProductDraft;

/// Fields of the product form, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter,
)]
pub enum FormField {
    /// Product title
    #[display("title")]
    Title,
    /// Price
    #[display("price")]
    Price,
    /// Image URL
    #[display("image")]
    Img,
    /// Rating
    #[display("rating")]
    Rate,
    /// Description
    #[display("description")]
    Description,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field that failed validation
    pub field: FormField,
    /// Reason for failure
    pub reason: String,
}

impl FieldViolation {
    /// Create a new field violation.
    pub fn new(field: FormField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Check that text has content beyond whitespace.
fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that a value looks like a web URL.
fn is_url_shaped(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Validate a draft against the form rules.
///
/// Returns one violation per failing field; an empty vector means the draft is
/// safe to submit. Validation never mutates anything.
///
/// # Examples
///
/// ```
/// use homecraft_core::{validate_draft, FormField, ProductDraft};
///
/// let draft = ProductDraft::builder()
///     .title("Shoe")
///     .price(0.0)
///     .img("http://x/y.png")
///     .rate(4)
///     .description("desc")
///     .build();
///
/// let violations = validate_draft(&draft);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field, FormField::Price);
/// ```
pub fn validate_draft(draft: &ProductDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !has_text(&draft.title) {
        violations.push(FieldViolation::new(FormField::Title, "Title is required"));
    }

    if !(draft.price.is_finite() && draft.price > 0.0) {
        violations.push(FieldViolation::new(
            FormField::Price,
            "Price must be a number greater than 0",
        ));
    }

    if !has_text(&draft.img) {
        violations.push(FieldViolation::new(FormField::Img, "Image URL is required"));
    } else if !is_url_shaped(&draft.img) {
        violations.push(FieldViolation::new(
            FormField::Img,
            "Image must be an http:// or https:// URL",
        ));
    }

    if !(1..=5).contains(&draft.rate) {
        violations.push(FieldViolation::new(
            FormField::Rate,
            "Rating must be between 1 and 5",
        ));
    }

    if !has_text(&draft.description) {
        violations.push(FieldViolation::new(
            FormField::Description,
            "Description is required",
        ));
    }

    violations
}
