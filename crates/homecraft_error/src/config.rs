//! Configuration error types.
//!
//! Configuration is merged from three layers (bundled defaults, the home
//! directory file, the working directory file); the kinds separate a layer
//! that fails to read from a merged result that fails to deserialize, plus
//! the data-directory resolution the store depends on.

/// Kinds of configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration file could not be read
    #[display("Failed to read configuration file: {}", _0)]
    Read(String),
    /// The configuration layers could not be merged
    #[display("Failed to merge configuration layers: {}", _0)]
    Merge(String),
    /// The merged configuration did not deserialize into the expected shape
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
    /// No usable data directory was configured or discoverable
    #[display("No data directory available: {}", _0)]
    DataDir(String),
}

/// Configuration error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use homecraft_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::DataDir(
    ///     "set storage.data_dir".to_string(),
    /// ));
    /// assert!(format!("{}", err).contains("data directory"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
