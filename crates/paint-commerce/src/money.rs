//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest currency unit. The storefront prices
//! in a single currency, so the symbol is a display concern supplied by the
//! caller rather than part of the value.
//!
//! Arithmetic saturates instead of overflowing: cart totals must be computable
//! for any quantity a caller manages to produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Default currency symbol for display.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "KSh";

/// A monetary value in minor units (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64) -> Self {
        Self { amount_minor }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use paint_commerce::money::Money;
    /// assert_eq!(Money::from_major(1500).amount_minor, 150_000);
    /// ```
    pub const fn from_major(amount: i64) -> Self {
        Self::new(amount.saturating_mul(100))
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_minor.saturating_add(other.amount_minor))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor))
    }

    /// Format with a currency symbol (e.g. "KSh 1,500.00").
    pub fn display_with(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.display_amount()
        } else {
            format!("{} {}", symbol, self.display_amount())
        }
    }

    /// Format without symbol, with thousands separators (e.g. "1,500.00").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let major = group_thousands(abs / 100);
        format!("{}{}.{:02}", sign, major, abs % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(150_000).display_with("KSh"), "KSh 1,500.00");
        assert_eq!(Money::new(5).display_amount(), "0.05");
        assert_eq!(Money::new(123_456_789).display_amount(), "1,234,567.89");
        assert_eq!(Money::new(-2550).display_with(""), "-25.50");
    }

    #[test]
    fn test_money_default_display() {
        assert_eq!(Money::from_major(500).to_string(), "KSh 500.00");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::new(1000) + Money::new(500);
        assert_eq!(c.amount_minor, 1500);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::new(1000) * 3).amount_minor, 3000);
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!((big + Money::new(1)).amount_minor, i64::MAX);
        assert_eq!((big * 2).amount_minor, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(100), Money::new(250)].into_iter().sum();
        assert_eq!(total, Money::new(350));
    }
}
