//! Cart and line item types.

use crate::cart::{CheckoutSummary, DEFAULT_UNIT_PRICE};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart ledger.
///
/// Holds at most one line item per product id, in the order each product was
/// first added. Every line item has a quantity of at least 1: a line whose
/// quantity would drop to zero or below is removed instead.
///
/// No operation here can fail. Unknown ids are no-ops and quantity arithmetic
/// saturates. A decoded cart is checked against the same rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CartRecord")]
pub struct Cart {
    /// Items in first-added order.
    items: Vec<LineItem>,
    /// Unit price for line items captured without a price.
    default_unit_price: Money,
}

impl Cart {
    /// Create an empty cart using [`DEFAULT_UNIT_PRICE`].
    pub fn new() -> Self {
        Self::with_default_unit_price(DEFAULT_UNIT_PRICE)
    }

    /// Create an empty cart with a specific fallback unit price.
    pub fn with_default_unit_price(default_unit_price: Money) -> Self {
        Self {
            items: Vec::new(),
            default_unit_price,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same id gains one unit and keeps the fields it
    /// was captured with. Otherwise a snapshot of the product is appended with
    /// quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "line item incremented"
            );
            return;
        }

        self.items.push(LineItem::from_product(product));
        tracing::debug!(product_id = %product.id, lines = self.items.len(), "line item added");
    }

    /// Remove a product's line item. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "line item removed");
        } else {
            tracing::trace!(%product_id, "remove ignored, not in cart");
        }
        removed
    }

    /// Adjust a line item's quantity by `delta`.
    ///
    /// A result of zero or less removes the line. A missing id is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityUpdate {
        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            tracing::trace!(%product_id, delta, "quantity update ignored, not in cart");
            return QuantityUpdate::NotInCart;
        };

        let quantity = self.items[index].quantity.saturating_add(delta);
        if quantity <= 0 {
            self.items.remove(index);
            tracing::debug!(%product_id, delta, "line item removed by quantity update");
            return QuantityUpdate::Removed;
        }

        self.items[index].quantity = quantity;
        tracing::debug!(%product_id, delta, quantity, "line item quantity updated");
        QuantityUpdate::Set(quantity)
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Fallback unit price for unpriced line items.
    pub fn default_unit_price(&self) -> Money {
        self.default_unit_price
    }

    /// Sum of quantity times unit price over all line items.
    ///
    /// Flat charges such as delivery are not included; see [`Cart::summary`].
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.total_price(self.default_unit_price))
            .sum()
    }

    /// Compose a checkout summary with a flat delivery fee.
    pub fn summary(&self, delivery_fee: Money) -> CheckoutSummary {
        CheckoutSummary::compose(self.item_count(), self.subtotal(), delivery_fee)
    }
}

/// Wire shape of a cart before its line items are checked.
#[derive(Deserialize)]
struct CartRecord {
    items: Vec<LineItem>,
    default_unit_price: Money,
}

impl TryFrom<CartRecord> for Cart {
    type Error = CommerceError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        for (index, item) in record.items.iter().enumerate() {
            if item.quantity < 1 {
                return Err(CommerceError::InvalidQuantity {
                    product_id: item.product_id,
                    quantity: item.quantity,
                });
            }
            if record.items[..index]
                .iter()
                .any(|earlier| earlier.product_id == item.product_id)
            {
                return Err(CommerceError::DuplicateProductId(item.product_id));
            }
        }

        Ok(Self {
            items: record.items,
            default_unit_price: record.default_unit_price,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now has this quantity.
    Set(i64),
    /// The quantity reached zero or below and the line was removed.
    Removed,
    /// No line exists for the product.
    NotInCart,
}

/// A line item in the cart.
///
/// A value snapshot of the product taken when it was first added; later
/// catalog changes are not reflected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product ID, unique within the cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product category.
    pub category: String,
    /// Captured unit price, if the product had one.
    pub price: Option<Money>,
    /// Product image reference.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Captured price, or `default` for unpriced products.
    pub fn unit_price(&self, default: Money) -> Money {
        self.price.unwrap_or(default)
    }

    /// Unit price times quantity.
    pub fn total_price(&self, default: Money) -> Money {
        self.unit_price(default) * self.quantity
    }
}
