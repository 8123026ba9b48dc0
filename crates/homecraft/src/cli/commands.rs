//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Homecraft - Product catalog manager with a PokeAPI reference panel
#[derive(Parser, Debug)]
#[command(name = "homecraft")]
#[command(about = "Product catalog manager with a PokeAPI reference panel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Add a product to the catalog
    Add {
        /// Product title
        #[arg(long)]
        title: String,

        /// Price in rupiah
        #[arg(long)]
        price: f64,

        /// Image URL (http:// or https://)
        #[arg(long)]
        img: String,

        /// Rating from 1 to 5
        #[arg(long)]
        rate: u8,

        /// Product description
        #[arg(long)]
        description: String,
    },

    /// List products, optionally filtered by title
    List {
        /// Substring filter applied to titles
        query: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show a single product
    Show {
        /// Product id
        id: u64,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Edit fields of an existing product
    Edit {
        /// Product id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New price in rupiah
        #[arg(long)]
        price: Option<f64>,

        /// New image URL
        #[arg(long)]
        img: Option<String>,

        /// New rating from 1 to 5
        #[arg(long)]
        rate: Option<u8>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a product from the catalog
    Remove {
        /// Product id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Fetch and display the PokeAPI reference data
    Pokedex {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
