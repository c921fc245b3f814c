//! Product catalog module.
//!
//! Contains the product type, the fixed category set, and the immutable
//! catalog the storefront filters.

mod catalog;
mod category;
mod paints;
mod product;

pub use catalog::Catalog;
pub use category::{CategorySet, ALL_CATEGORIES, PAINT_CATEGORIES};
pub use product::Product;
