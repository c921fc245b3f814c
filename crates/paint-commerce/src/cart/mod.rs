//! Shopping cart module.
//!
//! Contains the cart ledger, its line items, and checkout pricing.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, QuantityUpdate};
pub use pricing::{CheckoutSummary, PricingPolicy, DEFAULT_DELIVERY_FEE, DEFAULT_UNIT_PRICE};
