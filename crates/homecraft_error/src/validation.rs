//! Form validation error types.

/// Validation error raised when a product submission fails its field checks.
///
/// The message carries every violated field so a caller sees the full set of
/// problems at once rather than one per attempt.
///
/// # Examples
///
/// ```
/// use homecraft_error::ValidationError;
///
/// let err = ValidationError::new("price: must be greater than zero");
/// assert!(err.message.contains("price"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Joined field-level violation messages
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
