//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are whole currency units: "Sweet corn soup" costs 119.          │
//! │                                                                         │
//! │  Floats would turn 119 + 269 into 387.99999 on a bad day.               │
//! │  An unsigned integer can neither drift nor go negative, so the          │
//! │  "price is non-negative" rule is enforced by the type itself.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! let soup = Money::new(119);
//! let lasagne = Money::new(269);
//! assert_eq!((soup + lasagne).amount(), 388);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in whole currency units.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: menu prices cannot be negative
/// - **Saturating addition**: an order total never panics or wraps
/// - **Transparent serde**: serializes as a bare number (`119`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::new(319).amount(), 319);
    /// ```
    #[inline]
    pub const fn new(amount: u64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, clamping at `u64::MAX` instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Bare number; honours width and alignment (`{:>8}`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

/// Summing an iterator of prices; an empty iterator sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let money = Money::new(269);
        assert_eq!(money.amount(), 269);
        assert!(!money.is_zero());
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(119).to_string(), "119");
        assert_eq!(Money::zero().to_string(), "0");
        assert_eq!(format!("{:>5}", Money::new(119)), "  119");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::new(119);
        total += Money::new(269);
        assert_eq!(total.amount(), 388);
        assert_eq!((total + Money::new(12)).amount(), 400);
    }

    #[test]
    fn test_addition_saturates() {
        let big = Money::new(u64::MAX - 1);
        assert_eq!((big + Money::new(10)).amount(), u64::MAX);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::new(119), Money::new(269), Money::new(319)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.amount(), 707);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(119)).unwrap();
        assert_eq!(json, "119");
        let back: Money = serde_json::from_str("269").unwrap();
        assert_eq!(back, Money::new(269));
    }
}
