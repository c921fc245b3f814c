//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod gallery;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category to show (`All` for every category).
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Case-insensitive product name search.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Script file with one event per line (`-` for stdin).
    #[arg(default_value = "-")]
    pub script: String,

    /// Print the cart after every event, not just at the end.
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the gallery command.
#[derive(Args)]
pub struct GalleryArgs {
    /// Project tab (`all` for every project).
    #[arg(short, long, default_value = "all")]
    pub tab: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points at.
    Validate,
}
