//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built. `price` is optional:
/// catalogs that do not show pricing leave it out and the cart falls back to
/// its default unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category name, one of the catalog's category set.
    pub category: String,
    /// Unit price in minor units, if the catalog carries pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    /// Image reference. Not interpreted by the engine.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Create a product with no price and no image.
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            price: None,
            image: String::new(),
        }
    }

    /// Set the unit price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether the name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let p = Product::new(1, "Acrylic Paint Set", "Interior Wall")
            .with_price(Money::new(120_000))
            .with_image("acrylic.png");

        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.price, Some(Money::new(120_000)));
        assert_eq!(p.image, "acrylic.png");
    }

    #[test]
    fn test_name_match_ignores_case() {
        let p = Product::new(7, "Natural Stone Seal", "Stone Seal");
        assert!(p.name_contains_lowercase("stone"));
        assert!(p.name_contains_lowercase(""));
        assert!(!p.name_contains_lowercase("emulsion"));
    }

    #[test]
    fn test_product_deserialize_without_price() {
        let p: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Rock Master Coating", "category": "Rock Master"}"#)
                .unwrap();
        assert_eq!(p.price, None);
        assert!(p.image.is_empty());
    }

    #[test]
    fn test_product_price_is_plain_integer() {
        let p = Product::new(2, "Classic Emulsion", "Emulsion").with_price(Money::new(4999));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["price"], 4999);
    }
}
