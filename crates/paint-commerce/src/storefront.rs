//! The storefront engine.
//!
//! One synchronous state machine combining the immutable catalog, the filter
//! state and the cart ledger. Presentation layers call the mutators in event
//! order and read the accessors to render. Aggregates are derived on every
//! read, so a read always reflects the latest mutation.

use crate::cart::{Cart, CheckoutSummary, LineItem, PricingPolicy, QuantityUpdate};
use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::{visible_products, FilterState, Listing};

/// Catalog, filter state and cart for one shopping session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    filter: FilterState,
    cart: Cart,
    pricing: PricingPolicy,
}

impl Storefront {
    /// Start a session over `catalog` with an empty cart and default filters.
    pub fn new(catalog: Catalog, pricing: PricingPolicy) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            cart: Cart::with_default_unit_price(pricing.default_unit_price),
            pricing,
        }
    }

    /// Session over the built-in paint catalog with default pricing.
    pub fn paints() -> Self {
        Self::new(Catalog::paints(), PricingPolicy::default())
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Default unit price and delivery fee in effect.
    pub fn pricing(&self) -> PricingPolicy {
        self.pricing
    }

    /// Current category and search query.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Select a category; `All` shows every category.
    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.filter.active_category = category.into();
        tracing::debug!(category = %self.filter.active_category, "active category set");
    }

    /// Set the case-insensitive name search.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        tracing::trace!(query = %self.filter.search_query, "search query set");
    }

    /// Reset the category to `All` and the query to empty.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        tracing::debug!("filters cleared");
    }

    /// Products visible under the current filters, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        visible_products(&self.catalog, &self.filter)
    }

    /// Heading, visible products and category facets for the current filters.
    pub fn listing(&self) -> Listing<'_> {
        let listing = Listing::build(&self.catalog, &self.filter);
        tracing::trace!(visible = listing.len(), "listing built");
        listing
    }

    /// Add one unit of `product` to the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add_item(product);
    }

    /// Add one unit of the catalog product with `id`.
    ///
    /// Returns `false`, leaving the cart untouched, when the catalog has no
    /// such product.
    pub fn add_to_cart_by_id(&mut self, id: ProductId) -> bool {
        match self.catalog.get(id) {
            Some(product) => {
                self.cart.add_item(product);
                true
            }
            None => {
                tracing::debug!(product_id = %id, "add ignored, not in catalog");
                false
            }
        }
    }

    /// Drop a product's line item. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_item(id);
    }

    /// Adjust a line item's quantity by `delta`, removing it at zero or below.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> QuantityUpdate {
        self.cart.update_quantity(id, delta)
    }

    /// The cart ledger.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart line items in first-added order.
    pub fn line_items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of quantities across the cart.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal, excluding delivery.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Count for the cart badge; `None` hides the badge.
    pub fn badge_count(&self) -> Option<i64> {
        let count = self.item_count();
        (count > 0).then_some(count)
    }

    /// Subtotal plus the configured delivery fee.
    pub fn summary(&self) -> CheckoutSummary {
        self.cart.summary(self.pricing.delivery_fee)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::paints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_clean() {
        let store = Storefront::paints();
        assert_eq!(store.visible_products().len(), 12);
        assert!(store.line_items().is_empty());
        assert_eq!(store.badge_count(), None);
        assert_eq!(store.summary().grand_total, Money::zero());
    }

    #[test]
    fn test_filters_drive_visible_products() {
        let mut store = Storefront::paints();
        store.set_active_category("Weathershield");
        store.set_search_query("EXTREME");
        let names: Vec<&str> = store.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Extreme Weather Protection"]);

        store.clear_filters();
        assert_eq!(store.filter(), &FilterState::default());
        assert_eq!(store.visible_products().len(), 12);
    }

    #[test]
    fn test_add_by_id() {
        let mut store = Storefront::paints();
        assert!(store.add_to_cart_by_id(ProductId::new(3)));
        assert!(store.add_to_cart_by_id(ProductId::new(3)));
        assert!(!store.add_to_cart_by_id(ProductId::new(42)));

        assert_eq!(store.line_items().len(), 1);
        assert_eq!(store.badge_count(), Some(2));
    }

    #[test]
    fn test_reads_follow_mutations() {
        let mut store = Storefront::paints();
        store.add_to_cart_by_id(ProductId::new(1));
        assert_eq!(store.item_count(), 1);
        store.update_quantity(ProductId::new(1), 2);
        assert_eq!(store.item_count(), 3);
        store.remove_from_cart(ProductId::new(1));
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_summary_uses_policy() {
        let pricing = PricingPolicy {
            default_unit_price: Money::new(200),
            delivery_fee: Money::new(25),
        };
        let mut store = Storefront::new(Catalog::paints(), pricing);
        store.add_to_cart_by_id(ProductId::new(5));
        store.add_to_cart_by_id(ProductId::new(6));

        assert_eq!(store.subtotal(), Money::new(400));
        assert_eq!(store.summary().grand_total, Money::new(425));
    }
}
