//! Money type for rendering prices.
//!
//! Amounts are held in hundredths so that line prices and totals are summed
//! exactly and always print with two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount in hundredths of the display unit.
///
/// Addition saturates instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in hundredths (e.g., centavos).
    pub amount_minor: i64,
}

impl Money {
    /// Create a Money value from hundredths.
    pub fn new(amount_minor: i64) -> Self {
        Self { amount_minor }
    }

    /// Create a Money value from a decimal amount, rounding to two places.
    ///
    /// ```
    /// use foodies_cart::Money;
    /// assert_eq!(Money::from_decimal(49.99).amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::zero();
        }
        Self::new((amount * 100.0).round() as i64)
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Format with a currency glyph (e.g., "₱49.99").
    pub fn display(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Format without a glyph (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_minor.saturating_add(other.amount_minor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(120.0).amount_minor, 12000);
        assert_eq!(Money::from_decimal(49.999).amount_minor, 5000);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(30000).display("₱"), "₱300.00");
        assert_eq!(Money::new(5).display_amount(), "0.05");
        assert_eq!(Money::new(-150).display_amount(), "-1.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_sum() {
        let burger = Money::from_decimal(240.0);
        let fries = Money::from_decimal(60.0);
        let total: Money = [burger, fries].into_iter().sum();
        assert_eq!(total.display_amount(), "300.00");
    }

    #[test]
    fn test_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!((big + Money::new(1)).amount_minor, i64::MAX);
    }
}
