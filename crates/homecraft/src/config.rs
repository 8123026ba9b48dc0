//! Layered configuration for the Homecraft binary.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from homecraft.toml)
//! - User overrides (./homecraft.toml or ~/.config/homecraft/homecraft.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use homecraft_error::{ConfigError, ConfigErrorKind, HomecraftError, HomecraftResult};
use homecraft_pokeapi::PokedexConfig;
use homecraft_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Top-level configuration for the Homecraft binary.
///
/// # Example
///
/// ```toml
/// [storage]
/// key = "products"
///
/// [pokedex]
/// base_url = "https://pokeapi.co/api/v2"
/// ability = "battle-armor"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default, Getters)]
pub struct HomecraftConfig {
    /// Catalog store settings
    #[serde(default)]
    storage: StoreConfig,
    /// PokeAPI reference settings
    #[serde(default)]
    pokedex: PokedexConfig,
}

impl HomecraftConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> HomecraftResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                HomecraftError::from(ConfigError::new(ConfigErrorKind::Read(format!(
                    "{}: {}",
                    path.as_ref().display(),
                    e
                ))))
            })?
            .try_deserialize()
            .map_err(|e| {
                HomecraftError::from(ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (homecraft.toml shipped with the workspace)
    /// 2. User config in home directory (~/.config/homecraft/homecraft.toml)
    /// 3. User config in current directory (./homecraft.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use homecraft::HomecraftConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = HomecraftConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> HomecraftResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../homecraft.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/homecraft/homecraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("homecraft").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                HomecraftError::from(ConfigError::new(ConfigErrorKind::Merge(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                HomecraftError::from(ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))
            })
    }
}
