//! Homecraft CLI binary.
//!
//! This binary provides command-line access to the Homecraft catalog:
//! - Launch the TUI for browsing and editing products
//! - Add, edit, list, show, and remove products headlessly
//! - Fetch the PokeAPI reference data

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_add, handle_edit, handle_list, handle_pokedex, handle_remove,
        handle_show, launch_tui,
    };

    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Tui => {
            launch_tui().await?;
        }

        Commands::Add {
            title,
            price,
            img,
            rate,
            description,
        } => {
            handle_add(title, price, img, rate, description).await?;
        }

        Commands::List { query, format } => {
            handle_list(query.as_deref(), format).await?;
        }

        Commands::Show { id, format } => {
            handle_show(id, format).await?;
        }

        Commands::Edit {
            id,
            title,
            price,
            img,
            rate,
            description,
        } => {
            handle_edit(id, title, price, img, rate, description).await?;
        }

        Commands::Remove { id, yes } => {
            handle_remove(id, yes).await?;
        }

        Commands::Pokedex { format } => {
            handle_pokedex(format).await?;
        }
    }

    Ok(())
}
