//! Cart ledger and catalog filtering engine for the Jorozz Paints storefront.
//!
//! This crate holds the only stateful logic behind the storefront pages:
//!
//! - **Catalog**: immutable products and the fixed category set
//! - **Search**: category and free-text filtering, listing facets
//! - **Cart**: line items keyed by product id, quantities, subtotal
//! - **Storefront**: the session state machine combining all three
//! - **Gallery**: tabbed portfolio filtering for the home page
//!
//! Every cart and filter operation is total: unknown ids and out-of-range
//! quantity changes are no-ops or removals, never errors.
//!
//! # Example
//!
//! ```
//! use paint_commerce::prelude::*;
//!
//! let mut store = Storefront::paints();
//! store.set_active_category("Stone Seal");
//! assert_eq!(store.visible_products().len(), 2);
//!
//! store.add_to_cart_by_id(ProductId::new(7));
//! store.add_to_cart_by_id(ProductId::new(7));
//! store.update_quantity(ProductId::new(7), -1);
//! assert_eq!(store.item_count(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod gallery;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CategorySet, Product, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{Cart, CheckoutSummary, LineItem, PricingPolicy, QuantityUpdate};

    // Search
    pub use crate::search::{visible_products, CategoryFacet, FilterState, Listing};

    // Gallery
    pub use crate::gallery::{Gallery, Project};

    pub use crate::storefront::Storefront;
}
