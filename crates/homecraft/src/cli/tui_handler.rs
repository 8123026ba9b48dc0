//! TUI launch command handler.

use homecraft::{Catalog, FileBlobStore, HomecraftConfig, HomecraftResult, PokedexClient, run_tui};

/// Launch the terminal user interface.
pub async fn launch_tui() -> HomecraftResult<()> {
    let config = HomecraftConfig::load()?;
    let data_dir = config.storage().resolve_data_dir()?;

    tracing::info!(data_dir = %data_dir.display(), "Launching TUI");

    let store = FileBlobStore::new(data_dir)?;
    let mut catalog = Catalog::open(Box::new(store), config.storage().key.clone())?;
    let client = PokedexClient::new(config.pokedex().clone());

    run_tui(&mut catalog, client).await?;

    Ok(())
}
