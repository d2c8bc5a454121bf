//! Money type for representing prices.
//!
//! Storefront prices are whole roubles with no minor unit, so the amount is
//! a plain unsigned integer. Arithmetic saturates instead of failing: a cart
//! total can never make the ledger fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// The rouble sign printed after every amount.
pub const RUB_SYMBOL: &str = "\u{20bd}";

/// A price or total in whole roubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in whole roubles.
    pub amount: u64,
}

impl Money {
    /// Create a rouble amount.
    pub const fn rub(amount: u64) -> Self {
        Self { amount }
    }

    /// Zero roubles.
    pub const fn zero() -> Self {
        Self::rub(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    pub fn times(&self, quantity: u32) -> Money {
        Money::rub(self.amount.saturating_mul(u64::from(quantity)))
    }

    /// Add another amount, saturating at `u64::MAX`.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::rub(self.amount.saturating_add(other.amount))
    }

    /// Format the amount with thousands grouped by spaces (e.g., "100 000").
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }

    /// Format as a display string (e.g., "100 000 ₽").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), RUB_SYMBOL)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::rub(500).display(), "500 \u{20bd}");
        assert_eq!(Money::rub(5000).display(), "5 000 \u{20bd}");
        assert_eq!(Money::rub(100_000).display(), "100 000 \u{20bd}");
        assert_eq!(Money::rub(1_234_567).display_amount(), "1 234 567");
    }

    #[test]
    fn test_money_orders_by_amount() {
        assert!(Money::rub(500) < Money::rub(2000));
        assert_eq!(Money::rub(100_000).max(Money::rub(2500)), Money::rub(100_000));
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_money_times() {
        let m = Money::rub(5000);
        assert_eq!(m.times(3).amount, 15_000);
        assert_eq!((m * 0).amount, 0);
    }

    #[test]
    fn test_money_saturates() {
        let m = Money::rub(u64::MAX);
        assert_eq!(m.times(2).amount, u64::MAX);
        assert_eq!((m + Money::rub(1)).amount, u64::MAX);
    }
}
