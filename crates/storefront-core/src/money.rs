//! # Money Module
//!
//! Provides the `Won` type for KRW amounts.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KRW HAS NO SUBUNIT                                                     │
//! │                                                                         │
//! │  Every price, fee and total in the storefront is a whole number of     │
//! │  won. Wrapping i64 keeps amounts from mixing with quantities and       │
//! │  reward points, which are plain integers too.                          │
//! │                                                                         │
//! │    Won(28_100) * 2      = Won(56_200)      ✅                           │
//! │    Won(28_100) + 300    → does not compile ✅                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Won;
//!
//! let price = Won::new(28_100);
//! let line_total = price * 2;
//! assert_eq!(line_total.amount(), 56_200);
//! assert_eq!(line_total.to_string(), "56,200원");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Won Type
// =============================================================================

/// A whole-won monetary amount.
///
/// ## Design Decisions
/// - **i64 (signed)**: the discount line is displayed as a negative amount
/// - **Single field tuple struct**: serializes as a bare number
/// - **Saturating arithmetic**: never panics; range-checked line items stay
///   far below the `i64` limits
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Won(i64);

impl Won {
    /// Creates an amount from whole won.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Won(amount)
    }

    /// Returns the amount in whole won.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero won.
    #[inline]
    pub const fn zero() -> Self {
        Won(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ```rust
    /// use storefront_core::money::Won;
    ///
    /// assert_eq!(Won::new(28_100).multiply_quantity(3).amount(), 84_300);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Won(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as the storefront shows prices: thousands separators, `원` suffix.
impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}원", sign, grouped)
    }
}

impl Add for Won {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Won(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Won {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Won {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Won(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Won {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Won {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Won(self.0.saturating_mul(qty))
    }
}

impl Sum for Won {
    fn sum<I: Iterator<Item = Won>>(iter: I) -> Self {
        iter.fold(Won::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Won::new(28_100).to_string(), "28,100원");
        assert_eq!(Won::new(4_900).to_string(), "4,900원");
        assert_eq!(Won::new(0).to_string(), "0원");
        assert_eq!(Won::new(999).to_string(), "999원");
        assert_eq!(Won::new(1_234_567).to_string(), "1,234,567원");
        assert_eq!(Won::new(-4_900).to_string(), "-4,900원");
    }

    #[test]
    fn test_arithmetic() {
        let a = Won::new(33_000);
        let b = Won::new(28_100);

        assert_eq!((a + b).amount(), 61_100);
        assert_eq!((a - b).amount(), 4_900);
        assert_eq!((b * 2).amount(), 56_200);

        let mut c = Won::zero();
        c += a;
        c -= b;
        assert_eq!(c, Won::new(4_900));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Won::new(i64::MAX);
        assert_eq!(max.multiply_quantity(2), max);
        assert_eq!(max * 2, max);
        assert_eq!(max + Won::new(1), max);
        assert_eq!(Won::new(i64::MIN) - Won::new(1), Won::new(i64::MIN));

        let mut c = max;
        c += Won::new(4_900);
        assert_eq!(c, max);
    }

    #[test]
    fn test_sum() {
        let total: Won = [Won::new(1_000), Won::new(2_500), Won::new(500)]
            .into_iter()
            .sum();
        assert_eq!(total, Won::new(4_000));

        let empty: Won = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Won::zero().is_zero());
        assert!(Won::new(1).is_positive());
        assert!(Won::new(-1).is_negative());
        assert!(!Won::zero().is_positive());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Won::new(4_900)).unwrap();
        assert_eq!(json, "4900");
        let back: Won = serde_json::from_str("33000").unwrap();
        assert_eq!(back, Won::new(33_000));
    }
}
