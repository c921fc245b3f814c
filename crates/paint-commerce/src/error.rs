//! Commerce error types.
//!
//! Cart and filter operations are total and never produce these. Errors only
//! arise while building or decoding a catalog, or decoding a saved cart.

use crate::ids::ProductId;
use crate::money::Money;
use thiserror::Error;

/// Errors that can occur while assembling the storefront's static data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// A catalog entry has a blank name.
    #[error("Product {0} has an empty name")]
    EmptyProductName(ProductId),

    /// A catalog entry carries a negative price.
    #[error("Product {product_id} has a negative price: {price}")]
    NegativePrice { product_id: ProductId, price: Money },

    /// A catalog entry names a category outside the catalog's category set.
    #[error("Product {product_id} is in unknown category '{category}'")]
    UnknownCategory {
        product_id: ProductId,
        category: String,
    },

    /// A decoded cart line has a quantity below 1.
    #[error("Product {product_id} has an invalid quantity: {quantity}")]
    InvalidQuantity { product_id: ProductId, quantity: i64 },

    /// The category set itself is invalid.
    #[error("Invalid category set: {0}")]
    InvalidCategories(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
