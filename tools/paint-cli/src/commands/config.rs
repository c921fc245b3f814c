//! Configuration commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
        ConfigCommand::Validate => validate(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("Loaded from", &path.display().to_string()),
        None => ctx.output.kv("Loaded from", "built-in defaults"),
    }
    ctx.output.plain("");
    ctx.output.plain(&toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ShopConfig::default().save(&path)?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn validate(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;
    let catalog = ctx.config.load_catalog(&ctx.config_dir())?;

    ctx.output.success("Configuration is valid");
    ctx.output.kv("Products", &catalog.len().to_string());
    ctx.output.kv(
        "Categories",
        &catalog.categories().names().collect::<Vec<_>>().join(", "),
    );
    ctx.output.kv("Default price", &ctx.price(ctx.config.pricing.default_unit_price));
    ctx.output.kv("Delivery fee", &ctx.price(ctx.config.pricing.delivery_fee));
    Ok(())
}
