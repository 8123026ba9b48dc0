//! JSON codec error types.
//!
//! JSON appears in exactly two places: the persisted catalog snapshot and the
//! CLI's `--format json` output. The kinds name which one failed.

/// Kinds of JSON codec failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum JsonErrorKind {
    /// Stored catalog snapshot did not parse
    #[display("Failed to parse catalog snapshot: {}", _0)]
    SnapshotParse(String),
    /// Catalog snapshot could not be serialized for the blob store
    #[display("Failed to serialize catalog snapshot: {}", _0)]
    SnapshotSerialize(String),
    /// Value could not be encoded as JSON output
    #[display("Failed to encode JSON output: {}", _0)]
    OutputEncode(String),
}

/// JSON error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", kind, line, file)]
pub struct JsonError {
    /// The kind of error that occurred
    pub kind: JsonErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use homecraft_error::{JsonError, JsonErrorKind};
    ///
    /// let err = JsonError::new(JsonErrorKind::SnapshotParse(
    ///     "unexpected end of input".to_string(),
    /// ));
    /// assert!(format!("{}", err).contains("catalog snapshot"));
    /// ```
    #[track_caller]
    pub fn new(kind: JsonErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_name_the_failing_codec() {
        let parse = JsonError::new(JsonErrorKind::SnapshotParse("eof".to_string()));
        assert!(format!("{}", parse).contains("parse catalog snapshot"));

        let encode = JsonError::new(JsonErrorKind::OutputEncode("bad value".to_string()));
        assert!(format!("{}", encode).contains("encode JSON output"));
    }
}
