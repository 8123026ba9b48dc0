//! Filesystem-based blob storage implementation.
//!
//! This backend stores each blob as a JSON file in a flat directory,
//! named `{base_path}/{name}.json`.

use crate::BlobStore;
use homecraft_error::{HomecraftResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Filesystem storage backend.
///
/// Stores blobs as flat files:
/// `{base_path}/{name}.json`
///
/// # Example Structure
///
/// ```text
/// ~/.local/share/homecraft/
/// └── products.json
/// ```
///
/// # Features
///
/// - **Atomic writes**: Uses temp file + rename for atomicity
/// - **Name validation**: Blob names never escape the base directory
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `base_path` - Root directory for blob storage
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> HomecraftResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem blob store");
        Ok(Self { base_path })
    }

    /// Get the filesystem path for a blob name.
    ///
    /// Names are restricted to alphanumerics, hyphens, and underscores so a
    /// name can never address a file outside the base directory.
    fn blob_path(&self, name: &str) -> HomecraftResult<PathBuf> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(
                StorageError::new(StorageErrorKind::InvalidName(name.to_string())).into(),
            );
        }

        Ok(self.base_path.join(format!("{name}.json")))
    }
}

impl BlobStore for FileBlobStore {
    #[tracing::instrument(skip(self))]
    fn load(&self, name: &str) -> HomecraftResult<Option<Vec<u8>>> {
        let path = self.blob_path(name)?;

        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(
                    path = %path.display(),
                    size = bytes.len(),
                    "Loaded blob"
                );
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn save(&mut self, name: &str, bytes: &[u8]) -> HomecraftResult<()> {
        let path = self.blob_path(name)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %path.display(),
            size = bytes.len(),
            "Saved blob"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn exists(&self, name: &str) -> HomecraftResult<bool> {
        let path = self.blob_path(name)?;
        Ok(path.try_exists().map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?)
    }
}
