//! Client for the PokéAPI reference endpoints.

use crate::{Ability, PokedexConfig, ReferenceData, ResourceListPage};
use homecraft_error::{PokedexError, PokedexErrorKind, PokedexResult};
use tracing::instrument;

/// Client for the read-only reference panel fetches.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    config: PokedexConfig,
    client: reqwest::Client,
}

impl PokedexClient {
    /// Create a new client.
    #[instrument(skip(config), fields(base_url = %config.base_url(), ability = %config.ability()))]
    pub fn new(config: PokedexConfig) -> Self {
        tracing::debug!("Creating pokedex client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    /// Fetch the first page of the pokemon listing.
    #[instrument(skip(self))]
    pub async fn list_pokemon(&self) -> PokedexResult<ResourceListPage> {
        let url = format!("{}/pokemon/", self.config.base_url());
        tracing::debug!("Fetching pokemon listing from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            PokedexError::new(PokedexErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Server returned error: {}", status);
            return Err(PokedexError::new(PokedexErrorKind::Api(format!(
                "Server returned: {}",
                status
            ))));
        }

        let page: ResourceListPage = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            PokedexError::new(PokedexErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!(count = page.results().len(), "Fetched pokemon listing");
        Ok(page)
    }

    /// Fetch the configured ability with its effect descriptions.
    #[instrument(skip(self))]
    pub async fn ability(&self) -> PokedexResult<Ability> {
        let url = format!(
            "{}/ability/{}",
            self.config.base_url(),
            self.config.ability()
        );
        tracing::debug!("Fetching ability from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            PokedexError::new(PokedexErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Server returned error: {}", status);
            return Err(PokedexError::new(PokedexErrorKind::Api(format!(
                "Server returned: {}",
                status
            ))));
        }

        let ability: Ability = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            PokedexError::new(PokedexErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!(
            entries = ability.effect_entries().len(),
            "Fetched ability effects"
        );
        Ok(ability)
    }

    /// Fetch both reference resources concurrently.
    ///
    /// The two requests are independent; either failure fails the whole
    /// fetch, and the caller decides how to surface it.
    #[instrument(skip(self))]
    pub async fn reference_data(&self) -> PokedexResult<ReferenceData> {
        let (pokemon, ability) = tokio::try_join!(self.list_pokemon(), self.ability())?;

        tracing::info!(
            pokemon = pokemon.results().len(),
            effects = ability.effect_entries().len(),
            "Fetched reference data"
        );
        Ok(ReferenceData::new(pokemon, ability))
    }
}
