//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use paint_commerce::catalog::Catalog;
use paint_commerce::cart::PricingPolicy;
use paint_commerce::money::DEFAULT_CURRENCY_SYMBOL;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["paint.toml", ".paint.toml", "paint.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Shop presentation settings.
    #[serde(default)]
    pub shop: ShopSection,

    /// Pricing defaults.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Load the configured catalog, or the built-in paints when none is set.
    ///
    /// Relative catalog paths resolve against `base_dir`.
    pub fn load_catalog(&self, base_dir: &Path) -> Result<Catalog> {
        let Some(path) = &self.catalog.path else {
            return Ok(Catalog::paints());
        };

        let path = base_dir.join(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let catalog = if is_json(&path) {
            Catalog::from_json(&content)
        } else {
            Catalog::from_toml(&content)
        };
        catalog.with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;
        if self.pricing.default_unit_price.is_negative() {
            bail!("pricing.default_unit_price must not be negative");
        }
        if self.pricing.delivery_fee.is_negative() {
            bail!("pricing.delivery_fee must not be negative");
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Shop presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopSection {
    /// Shop name shown in headers.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Currency symbol for prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_shop_name() -> String {
    "Jorozz Paints".to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to a JSON or TOML product file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging.level '{}'", self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_commerce::Money;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.shop.currency_symbol, "KSh");
        assert_eq!(config.pricing, PricingPolicy::default());
    }

    #[test]
    fn test_parse_toml_sections() {
        let config: ShopConfig = toml::from_str(
            r#"
            [shop]
            name = "Test Paints"

            [pricing]
            delivery_fee = 0

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.shop.name, "Test Paints");
        assert_eq!(config.shop.currency_symbol, "KSh");
        assert!(config.pricing.delivery_fee.is_zero());
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut config = ShopConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        let mut config = ShopConfig::default();
        config.pricing.delivery_fee = Money::new(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShopConfig::default();
        config.catalog.path = Some("products.json".to_string());

        for name in ["paint.toml", "paint.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(ShopConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_load_catalog_default_is_paints() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ShopConfig::default().load_catalog(dir.path()).unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products.toml"),
            "[[products]]\nid = 1\nname = \"Classic Emulsion\"\ncategory = \"Emulsion\"\n",
        )
        .unwrap();

        let mut config = ShopConfig::default();
        config.catalog.path = Some("products.toml".to_string());
        let catalog = config.load_catalog(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products.json"),
            r#"{"products": [{"id": 1, "name": "A", "category": "X"}, {"id": 1, "name": "B", "category": "X"}]}"#,
        )
        .unwrap();

        let mut config = ShopConfig::default();
        config.catalog.path = Some("products.json".to_string());
        let err = config.load_catalog(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate product id"));
    }
}
