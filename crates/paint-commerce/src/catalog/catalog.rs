//! The static product catalog.

use crate::catalog::{paints, CategorySet, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Deserialize;
use std::collections::HashSet;

/// An immutable, ordered list of products and the category set they use.
///
/// Built once at startup. Nothing in the engine mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: CategorySet,
}

/// On-disk catalog layout shared by the JSON and TOML loaders.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog whose categories are derived from the products.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let categories = CategorySet::derive(products.iter().map(|p| p.category.as_str()));
        Self::with_categories(products, categories)
    }

    /// Build a catalog, requiring every product to use a category from `categories`.
    pub fn with_categories(
        products: Vec<Product>,
        categories: CategorySet,
    ) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if let Err(e) = validate(product, &categories, &mut seen) {
                tracing::warn!(product_id = %product.id, error = %e, "rejected catalog entry");
                return Err(e);
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog built"
        );
        Ok(Self {
            products,
            categories,
        })
    }

    /// The built-in paint catalog.
    pub fn paints() -> Self {
        Self {
            products: paints::products(),
            categories: CategorySet::paints(),
        }
    }

    /// Decode a catalog from JSON.
    ///
    /// The document is an object with a `products` array and an optional
    /// `categories` array. When `categories` is present it is enforced.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Decode a catalog from TOML (`categories = [...]` and `[[products]]` tables).
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CommerceError> {
        if file.categories.is_empty() {
            Self::new(file.products)
        } else {
            Self::with_categories(file.products, CategorySet::new(file.categories)?)
        }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The catalog's category set.
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(
    product: &Product,
    categories: &CategorySet,
    seen: &mut HashSet<ProductId>,
) -> Result<(), CommerceError> {
    if !seen.insert(product.id) {
        return Err(CommerceError::DuplicateProductId(product.id));
    }
    if product.name.trim().is_empty() {
        return Err(CommerceError::EmptyProductName(product.id));
    }
    if let Some(price) = product.price {
        if price.is_negative() {
            return Err(CommerceError::NegativePrice {
                product_id: product.id,
                price,
            });
        }
    }
    if !categories.contains(&product.category) {
        return Err(CommerceError::UnknownCategory {
            product_id: product.id,
            category: product.category.clone(),
        });
    }
    Ok(())
}
