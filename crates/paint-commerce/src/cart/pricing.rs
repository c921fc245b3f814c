//! Cart pricing defaults and the checkout summary.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Unit price applied to products that carry no price (KSh 1,500.00).
pub const DEFAULT_UNIT_PRICE: Money = Money::from_major(1_500);

/// Flat delivery charge added to non-empty carts (KSh 500.00).
pub const DEFAULT_DELIVERY_FEE: Money = Money::from_major(500);

/// Storefront pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fallback unit price for unpriced products.
    #[serde(default = "default_unit_price")]
    pub default_unit_price: Money,
    /// Flat delivery charge.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Money,
}

fn default_unit_price() -> Money {
    DEFAULT_UNIT_PRICE
}

fn default_delivery_fee() -> Money {
    DEFAULT_DELIVERY_FEE
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            default_unit_price: DEFAULT_UNIT_PRICE,
            delivery_fee: DEFAULT_DELIVERY_FEE,
        }
    }
}

/// Totals shown at the bottom of the cart drawer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Sum of quantities.
    pub item_count: i64,
    /// Ledger subtotal.
    pub subtotal: Money,
    /// Delivery charge actually applied.
    pub delivery_fee: Money,
    /// Subtotal plus delivery.
    pub grand_total: Money,
}

impl CheckoutSummary {
    /// Compose a summary. An empty cart is charged no delivery.
    pub fn compose(item_count: i64, subtotal: Money, delivery_fee: Money) -> Self {
        let delivery_fee = if item_count > 0 {
            delivery_fee
        } else {
            Money::zero()
        };
        Self {
            item_count,
            subtotal,
            delivery_fee,
            grand_total: subtotal + delivery_fee,
        }
    }

    /// Check whether checkout can proceed (anything in the cart).
    pub fn can_checkout(&self) -> bool {
        self.item_count > 0
    }
}
