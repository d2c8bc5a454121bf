//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Category (male, female, other, or Мужское/Женское/Другое).
    #[arg(long)]
    pub category: Option<String>,

    /// Only show exclusive products.
    #[arg(short, long)]
    pub exclusive: bool,

    /// Lower price bound.
    #[arg(long)]
    pub min: Option<u64>,

    /// Upper price bound.
    #[arg(long)]
    pub max: Option<u64>,

    /// Case-insensitive name search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key (price-asc, price-desc, name).
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the session command.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Script of actions, one per line (reads stdin when omitted).
    pub script: Option<String>,

    /// Print the cart after the last action.
    #[arg(long)]
    pub show_cart: bool,
}

/// Arguments for the catalog command.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list one category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Output path.
        #[arg(default_value = "store.toml")]
        path: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
