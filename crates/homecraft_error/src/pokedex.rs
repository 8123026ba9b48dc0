//! Error types for the PokéAPI reference client.

/// Error kinds for PokéAPI operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PokedexErrorKind {
    /// HTTP communication error
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error: {}", _0)]
    Api(String),

    /// Response body did not match the expected shape
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Error wrapper with location tracking.
///
/// # Examples
///
/// ```
/// use homecraft_error::{PokedexError, PokedexErrorKind};
///
/// let err = PokedexError::new(PokedexErrorKind::Api("404 Not Found".to_string()));
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pokedex Error: {} at line {} in {}", kind, line, file)]
pub struct PokedexError {
    /// The error kind
    pub kind: PokedexErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PokedexError {
    /// Create a new PokedexError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PokedexErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for PokéAPI operations.
pub type PokedexResult<T> = Result<T, PokedexError>;
