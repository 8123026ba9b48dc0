//! Storage configuration.

use homecraft_error::{ConfigError, ConfigErrorKind, HomecraftResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_key() -> String {
    "products".to_string()
}

/// Configuration for the persistent catalog store.
///
/// ```toml
/// [storage]
/// data_dir = "/var/lib/homecraft"
/// key = "products"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding store blobs; the platform data directory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Blob name the catalog persists under
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

impl StoreConfig {
    /// Resolve the directory blobs are stored in.
    ///
    /// Falls back to `{platform data dir}/homecraft` when no directory is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns error if no directory is configured and the platform exposes
    /// no data directory.
    pub fn resolve_data_dir(&self) -> HomecraftResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir().map(|dir| dir.join("homecraft")).ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::DataDir(
                    "platform exposes none; set storage.data_dir".to_string(),
                ))
                .into()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let config = StoreConfig::default();
        assert_eq!(config.key, "products");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = StoreConfig {
            data_dir: Some(PathBuf::from("/var/lib/homecraft")),
            key: default_key(),
        };

        let resolved = config.resolve_data_dir().unwrap();
        assert_eq!(resolved, PathBuf::from("/var/lib/homecraft"));
    }

    #[test]
    fn test_deserializes_from_partial_toml() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.key, "products");
    }
}
