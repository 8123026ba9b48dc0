//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the data directory
    #[display("Failed to create data directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a store blob
    #[display("Failed to write store blob: {}", _0)]
    FileWrite(String),
    /// Failed to read a store blob
    #[display("Failed to read store blob: {}", _0)]
    FileRead(String),
    /// No blob exists under the requested store name
    #[display("Store blob not found: {}", _0)]
    NotFound(String),
    /// Store name is not usable as a file name
    #[display("Invalid store name: {}", _0)]
    InvalidName(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use homecraft_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("products".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
