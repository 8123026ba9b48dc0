//! PokeAPI reference command handler.

use super::commands::OutputFormat;
use homecraft::{HomecraftConfig, HomecraftResult, JsonError, JsonErrorKind, PokedexClient};

/// Fetch and display the PokeAPI reference data.
pub async fn handle_pokedex(format: OutputFormat) -> HomecraftResult<()> {
    let config = HomecraftConfig::load()?;
    let client = PokedexClient::new(config.pokedex().clone());
    let data = client.reference_data().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "pokemon": data.pokemon(),
                "ability": data.ability(),
            }))
            .map_err(|e| JsonError::new(JsonErrorKind::OutputEncode(e.to_string())))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Pokemon ({} total):", data.pokemon().count());
            for resource in data.pokemon().results() {
                println!("  {}", resource.name());
            }
            println!();
            println!("Ability effects:");
            for entry in data.ability().effect_entries() {
                println!("  [{}] {}", entry.language().name(), entry.short_effect());
            }
        }
    }

    Ok(())
}
