//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing item costs in floating point:                                  │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  Splitting a shared fee:                                                │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every input is quantized to cents once, at the input boundary.      │
//! │    Sums are exact; each person's total is rounded exactly once.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::money::Money;
//!
//! let burger = Money::from_cents(1250); // $12.50
//! let fries = Money::from_cents(475); // $4.75
//!
//! let subtotal = burger + fries;
//! assert_eq!(subtotal.cents(), 1725);
//! assert_eq!(subtotal.to_string(), "$17.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Nothing in the split rejects negative inputs, so the
///   type must be able to carry them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating arithmetic**: Sums clamp at the i64 range instead of
///   panicking or wrapping
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PersonBill.item_costs ──► person subtotal ──┬──► rate × subtotal ──┐   │
/// │                                              │                      │   │
/// │  SharedCosts (tax/tip/other) ──► Rate ───────┘                      │   │
/// │                                                                     ▼   │
/// │  SharedCosts.even_split ──► even_split / n ─────► IndividualTotal.total │
/// │                                       (exact sum, rounded once)         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let tip = Money::from_cents(500); // $5.00
    /// assert_eq!(tip.cents(), 500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a wide intermediate result, clamping it
    /// to the representable range.
    #[inline]
    pub(crate) fn from_cents_saturating(cents: i128) -> Self {
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Divides this amount into `parts` equal shares, rounded to the cent.
    ///
    /// Zero parts is treated as one part, so an even-split fee with nobody
    /// to split it between is returned whole.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).split_evenly(2).cents(), 500);
    /// assert_eq!(Money::from_cents(1000).split_evenly(3).cents(), 333);
    /// assert_eq!(Money::from_cents(1000).split_evenly(0).cents(), 1000);
    /// ```
    pub fn split_evenly(&self, parts: usize) -> Money {
        let parts = parts.max(1) as i128;
        Money::from_cents_saturating(div_round_half_away(self.0 as i128, parts))
    }
}

/// Integer division rounding to nearest, halves away from zero.
///
/// `denominator` must be non-zero; every caller in this crate checks it.
/// Works on quotient and remainder so numerators near the i128 limits
/// cannot overflow.
pub(crate) fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    // |remainder| < |denominator|, so doubling it stays in range
    if remainder.unsigned_abs() * 2 >= denominator.unsigned_abs() {
        if (numerator < 0) == (denominator < 0) {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `$12.34` rendering, used in logs and debug output.
///
/// UI display goes through [`crate::format::format_currency`], which adds
/// thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut running = a;
        running += b;
        assert_eq!(running.cents(), 1500);

        let costs = vec![Money::from_cents(10), Money::from_cents(20)];
        let total: Money = costs.iter().sum();
        assert_eq!(total.cents(), 30);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX - 10);

        assert_eq!((huge + Money::from_cents(100)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);

        let costs = vec![huge, huge, huge];
        let total: Money = costs.iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_from_cents_saturating_clamps() {
        assert_eq!(Money::from_cents_saturating(i128::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_cents_saturating(i128::MIN).cents(), i64::MIN);
        assert_eq!(Money::from_cents_saturating(-42).cents(), -42);
    }

    /// Splitting $10.00 three ways loses a cent; the loss is accepted
    /// rather than hidden in one person's share.
    #[test]
    fn test_split_evenly_precision_loss_documented() {
        let ten_dollars = Money::from_cents(1000);
        let share = ten_dollars.split_evenly(3);
        assert_eq!(share.cents(), 333);

        let lost = ten_dollars - (share + share + share);
        assert_eq!(lost.cents(), 1);
    }

    #[test]
    fn test_split_evenly_rounds_to_nearest_cent() {
        // $0.05 / 2 = 2.5 cents -> 3 cents
        assert_eq!(Money::from_cents(5).split_evenly(2).cents(), 3);
        // $20.00 / 3 = 666.67 cents -> 667 cents
        assert_eq!(Money::from_cents(2000).split_evenly(3).cents(), 667);
    }

    #[test]
    fn test_div_round_half_away() {
        assert_eq!(div_round_half_away(7, 2), 4);
        assert_eq!(div_round_half_away(-7, 2), -4);
        assert_eq!(div_round_half_away(7, -2), -4);
        assert_eq!(div_round_half_away(6, 4), 2);
        assert_eq!(div_round_half_away(5, 4), 1);
        assert_eq!(div_round_half_away(0, 9), 0);
        assert_eq!(div_round_half_away(-5, 4), -1);
        assert_eq!(div_round_half_away(-6, -4), 2);
    }

    #[test]
    fn test_div_round_half_away_near_limits() {
        assert_eq!(div_round_half_away(i128::MAX, 1), i128::MAX);
        assert_eq!(div_round_half_away(i128::MAX, 2), i128::MAX / 2 + 1);
        assert_eq!(div_round_half_away(i128::MIN + 1, 2), (i128::MIN + 1) / 2 - 1);
    }
}
