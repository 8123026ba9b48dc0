//! Wire models for the PokéAPI reference endpoints.
//!
//! These models cover only the fields the reference panel consumes; the API
//! returns many more, which serde ignores.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A named API resource with its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct NamedResource {
    /// Resource name (e.g., "bulbasaur" or "en")
    name: String,
    /// Canonical URL of the full resource
    url: String,
}

/// One page of a paginated resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ResourceListPage {
    /// Total number of resources across all pages
    count: u32,
    /// URL of the next page, if any
    #[serde(default)]
    next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    previous: Option<String>,
    /// Resources on this page
    results: Vec<NamedResource>,
}

/// An ability with its language-tagged effect descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Ability {
    /// Effect descriptions in every language the API carries
    effect_entries: Vec<EffectEntry>,
}

/// A single language-tagged effect description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EffectEntry {
    /// Full effect text
    effect: String,
    /// Condensed effect text
    short_effect: String,
    /// Language the texts are written in
    language: NamedResource,
}

/// Everything the reference panel renders, fetched in one round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReferenceData {
    /// First page of the pokemon listing
    pokemon: ResourceListPage,
    /// The configured ability with its effects
    ability: Ability,
}

impl ReferenceData {
    /// Pair a pokemon listing with an ability.
    pub fn new(pokemon: ResourceListPage, ability: Ability) -> Self {
        Self { pokemon, ability }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pokemon_page() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let page: ResourceListPage = serde_json::from_str(json).unwrap();
        assert_eq!(*page.count(), 1302);
        assert!(page.next().is_some());
        assert_eq!(*page.previous(), None);
        assert_eq!(page.results().len(), 2);
        assert_eq!(page.results()[0].name(), "bulbasaur");
    }

    #[test]
    fn test_deserialize_ability_ignores_extra_fields() {
        // Real responses carry many fields beyond effect_entries
        let json = r#"{
            "id": 4,
            "name": "battle-armor",
            "is_main_series": true,
            "effect_entries": [
                {
                    "effect": "Moves cannot score critical hits against this Pokémon.",
                    "short_effect": "Protects against critical hits.",
                    "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}
                }
            ]
        }"#;

        let ability: Ability = serde_json::from_str(json).unwrap();
        assert_eq!(ability.effect_entries().len(), 1);
        let entry = &ability.effect_entries()[0];
        assert_eq!(entry.language().name(), "en");
        assert!(entry.short_effect().contains("critical"));
    }

    #[test]
    fn test_deserialize_empty_effect_entries() {
        let json = r#"{"effect_entries": []}"#;
        let ability: Ability = serde_json::from_str(json).unwrap();
        assert!(ability.effect_entries().is_empty());
    }
}
