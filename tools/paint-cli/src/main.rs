//! Paint CLI - Command line storefront for the Jorozz Paints catalog.
//!
//! Commands:
//! - `paint catalog` - List products for a category and search query
//! - `paint session` - Replay a script of storefront events against a cart
//! - `paint gallery` - Browse the project portfolio by tab
//! - `paint config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, GalleryArgs, SessionArgs};

/// Paint CLI - Browse the paint catalog and drive a shopping cart
#[derive(Parser)]
#[command(name = "paint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// Replay storefront events and show the resulting cart
    Session(SessionArgs),

    /// Browse the project gallery
    Gallery(GalleryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&ctx.config.logging, cli.verbose) {
        ctx.output.warn(&format!("Logging disabled: {:#}", e));
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Gallery(args) => commands::gallery::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
