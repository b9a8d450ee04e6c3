// ABOUTME: CLI argument parsing and command routing for slide-picker
//
// Provides command-line interface for:
// - Launching the presentation wizard (tui, default)
// - Inspecting the base and product slide catalogs (catalog, products)
// - Listing presentation history (history)

pub mod catalog;
pub mod history;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::ClientType;

/// Slide picker - build client presentations from slide catalogs
#[derive(Parser)]
#[command(name = "slide-picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the wizard TUI (default if no command given)
    Tui,

    /// Print the base slide catalog for a client type
    Catalog(CatalogArgs),

    /// Print the product catalog tree
    Products,

    /// Print the presentation history
    History,
}

/// Arguments for the catalog command
#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Client type whose base deck to print
    #[arg(long, value_enum, default_value = "new")]
    pub client_type: ClientType,
}
