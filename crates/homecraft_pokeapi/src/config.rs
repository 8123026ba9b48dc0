//! Configuration for the PokéAPI reference client.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_ability() -> String {
    "battle-armor".to_string()
}

/// Configuration for the reference panel fetches.
///
/// ```toml
/// [pokedex]
/// base_url = "https://pokeapi.co/api/v2"
/// ability = "battle-armor"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PokedexConfig {
    /// Base URL of the API, without a trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Ability whose effect descriptions the panel shows
    #[serde(default = "default_ability")]
    ability: String,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ability: default_ability(),
        }
    }
}

impl PokedexConfig {
    /// Create a configuration with an explicit base URL and ability.
    pub fn new(base_url: impl Into<String>, ability: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ability: ability.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PokedexConfig::default();
        assert_eq!(config.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(config.ability(), "battle-armor");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: PokedexConfig =
            serde_json::from_str(r#"{"ability": "sturdy"}"#).unwrap();
        assert_eq!(config.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(config.ability(), "sturdy");
    }
}
