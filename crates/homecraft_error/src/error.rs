//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, PokedexError, StorageError, TuiError, ValidationError};

/// Discriminated union of every error domain in the workspace.
///
/// # Examples
///
/// ```
/// use homecraft_error::{HomecraftError, ConfigError, ConfigErrorKind};
///
/// let config_err = ConfigError::new(ConfigErrorKind::DataDir("unset".to_string()));
/// let err: HomecraftError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HomecraftErrorKind {
    /// Persistent store error
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Product submission failed validation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// PokéAPI reference client error
    #[from(PokedexError)]
    Pokedex(PokedexError),
    /// Terminal UI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Homecraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use homecraft_error::{HomecraftResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> HomecraftResult<()> {
///     Err(StorageError::new(StorageErrorKind::NotFound("products".to_string())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Homecraft Error: {}", _0)]
pub struct HomecraftError(Box<HomecraftErrorKind>);

impl HomecraftError {
    /// Create a new error from a kind.
    pub fn new(kind: HomecraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HomecraftErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HomecraftErrorKind
impl<T> From<T> for HomecraftError
where
    T: Into<HomecraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Homecraft operations.
///
/// # Examples
///
/// ```
/// use homecraft_error::{HomecraftResult, JsonError, JsonErrorKind};
///
/// fn decode_blob() -> HomecraftResult<String> {
///     Err(JsonError::new(JsonErrorKind::SnapshotParse(
///         "unexpected end of input".to_string(),
///     )))?
/// }
/// ```
pub type HomecraftResult<T> = std::result::Result<T, HomecraftError>;
