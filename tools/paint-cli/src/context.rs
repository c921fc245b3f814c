//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use paint_commerce::{Money, Storefront};

use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    /// Load context with `cwd` as the working directory.
    fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (ShopConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest existing file wins; if it fails to load, that is an error.
    fn find_config(start: &Path) -> Result<Option<(ShopConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = ShopConfig::load(&config_path)?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Directory relative catalog paths resolve against.
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Start a storefront session from the configured catalog and pricing.
    pub fn storefront(&self) -> Result<Storefront> {
        self.config.validate()?;
        let catalog = self.config.load_catalog(&self.config_dir())?;
        self.output.debug(&format!("Loaded catalog with {} products", catalog.len()));
        Ok(Storefront::new(catalog, self.config.pricing))
    }

    /// Format an amount with the configured currency symbol.
    pub fn price(&self, amount: Money) -> String {
        amount.display_with(&self.config.shop.currency_symbol)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_commerce::ProductId;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("paint.toml"), "[shop]\nname = \"Up Top\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_in(nested, None, quiet()).unwrap();
        assert_eq!(ctx.config.shop.name, "Up Top");
        assert_eq!(ctx.config_dir(), dir.path());
    }

    #[test]
    fn test_broken_discovered_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("paint.toml"),
            "[pricing]\ndelivery_fee = \"free\"\n\n[catalog]\npath = \"missing.json\"\n",
        )
        .unwrap();

        let err = Context::load_in(dir.path().to_path_buf(), None, quiet())
            .err()
            .unwrap();
        assert!(format!("{:#}", err).contains("paint.toml"), "{:#}", err);
    }

    #[test]
    fn test_negative_pricing_rejected_before_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("paint.toml"),
            "[pricing]\ndefault_unit_price = -150000\ndelivery_fee = -50000\n",
        )
        .unwrap();

        let ctx = Context::load_in(dir.path().to_path_buf(), None, quiet()).unwrap();
        let err = ctx.storefront().err().unwrap();
        assert!(err.to_string().contains("must not be negative"), "{}", err);
    }

    #[test]
    fn test_storefront_uses_configured_pricing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("paint.toml"), "[pricing]\ndefault_unit_price = 1000\n")
            .unwrap();

        let ctx = Context::load_in(dir.path().to_path_buf(), None, quiet()).unwrap();
        let mut store = ctx.storefront().unwrap();
        assert!(store.add_to_cart_by_id(ProductId::new(1)));
        assert_eq!(store.subtotal(), Money::new(1000));
    }
}
