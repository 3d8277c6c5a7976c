//! # Domain Types
//!
//! Core domain types used throughout Tabsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PersonBill    │   │   SharedCosts   │   │  SplitSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (BillId)    │   │  tax            │   │  individuals    │       │
//! │  │  name           │   │  tip            │   │  bill_total     │       │
//! │  │  item_costs     │   │  other          │   │  rates          │       │
//! │  └─────────────────┘   │  even_split     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rate        │   │ SharedCostKind  │   │ IndividualTotal │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (i64)      │   │  Tax / Tip      │   │  name, total    │       │
//! │  │  1400 = 14%     │   │  Other / Even   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{div_round_half_away, Money};

// =============================================================================
// Rate
// =============================================================================

/// A percentage factor represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1400 bps = 14%. Rates derived from a bill are
/// always rounded to two decimals of the factor (whole percents), which keeps
/// them multiples of 100 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(i64);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: i64) -> Self {
        Rate(bps)
    }

    /// Derives the factor `part / whole`, rounded to two decimals.
    ///
    /// A zero `whole` yields a zero rate: with nothing ordered there is
    /// nothing to apportion against. Ratios beyond the i64 range clamp.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    /// use tabsplit_core::types::Rate;
    ///
    /// // $5.00 tip on a $35.00 bill = 0.142857... -> 0.14
    /// let rate = Rate::proportion(Money::from_cents(500), Money::from_cents(3500));
    /// assert_eq!(rate.bps(), 1400);
    ///
    /// assert!(Rate::proportion(Money::from_cents(500), Money::zero()).is_zero());
    /// ```
    pub fn proportion(part: Money, whole: Money) -> Self {
        if whole.is_zero() {
            return Rate::zero();
        }

        let hundredths = div_round_half_away(part.cents() as i128 * 100, whole.cents() as i128);
        let bps = (hundredths * 100).clamp(i64::MIN as i128, i64::MAX as i128);
        Rate(bps as i64)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> i64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Bill Identity
// =============================================================================

/// Identifier of a person's bill.
///
/// Handed out sequentially by the bill store and never reused, even after
/// the person is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillId(u32);

impl BillId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        BillId(id)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Person Bill
// =============================================================================

/// One participant's record: a name and the costs of what they ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonBill {
    pub id: BillId,

    /// May be empty while the person is still being edited.
    pub name: String,

    /// Item costs in entry order.
    pub item_costs: Vec<Money>,
}

impl PersonBill {
    /// A fresh record with no name and no costs.
    pub fn new(id: BillId) -> Self {
        PersonBill {
            id,
            name: String::new(),
            item_costs: Vec::new(),
        }
    }

    /// The person's food-and-drink subtotal.
    ///
    /// Costs are whole cents already, so the sum is exact and needs no
    /// further rounding.
    pub fn subtotal(&self) -> Money {
        self.item_costs.iter().sum()
    }
}

// =============================================================================
// Shared Costs
// =============================================================================

/// Which bill-wide charge a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SharedCostKind {
    /// Apportioned by each person's share of food and drink.
    Tax,
    /// Apportioned by each person's share of food and drink.
    Tip,
    /// Any other percentage-based charge (service fee, etc.).
    Other,
    /// Divided equally regardless of what each person ordered.
    EvenSplit,
}

impl SharedCostKind {
    /// All kinds, in display order.
    pub const ALL: [SharedCostKind; 4] = [
        SharedCostKind::Tax,
        SharedCostKind::Tip,
        SharedCostKind::Other,
        SharedCostKind::EvenSplit,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            SharedCostKind::Tax => "Tax",
            SharedCostKind::Tip => "Tip",
            SharedCostKind::Other => "Other Percentage-Based Costs",
            SharedCostKind::EvenSplit => "Even-Split Costs",
        }
    }
}

/// The four bill-wide charges. Each is optional; absent counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SharedCosts {
    pub tax: Option<Money>,
    pub tip: Option<Money>,
    pub other: Option<Money>,
    pub even_split: Option<Money>,
}

impl SharedCosts {
    /// The entered value for `kind`, or `None` if nothing was entered.
    pub fn entered(&self, kind: SharedCostKind) -> Option<Money> {
        match kind {
            SharedCostKind::Tax => self.tax,
            SharedCostKind::Tip => self.tip,
            SharedCostKind::Other => self.other,
            SharedCostKind::EvenSplit => self.even_split,
        }
    }

    /// The value for `kind`, with absent treated as zero.
    pub fn amount(&self, kind: SharedCostKind) -> Money {
        self.entered(kind).unwrap_or_default()
    }

    /// Returns a copy with `kind` set (or cleared with `None`).
    pub fn with(&self, kind: SharedCostKind, value: Option<Money>) -> Self {
        let mut next = self.clone();
        let slot = match kind {
            SharedCostKind::Tax => &mut next.tax,
            SharedCostKind::Tip => &mut next.tip,
            SharedCostKind::Other => &mut next.other,
            SharedCostKind::EvenSplit => &mut next.even_split,
        };
        *slot = value;
        next
    }

    /// Sum of all four charges.
    pub fn total(&self) -> Money {
        SharedCostKind::ALL.iter().map(|k| self.amount(*k)).sum()
    }
}

// =============================================================================
// Calculation Output
// =============================================================================

/// What one person owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IndividualTotal {
    pub id: BillId,
    pub name: String,
    /// Food and drink only.
    pub subtotal: Money,
    /// Subtotal plus this person's share of every shared cost.
    pub total: Money,
}

/// The rates applied in a split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SplitRates {
    pub tax: Rate,
    pub tip: Rate,
    pub other: Rate,
}

/// Output of the split calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SplitSummary {
    /// One entry per person, in bill order.
    pub individuals: Vec<IndividualTotal>,

    /// Sum of every person's food and drink.
    pub food_and_drink_total: Money,

    /// Food and drink plus the raw shared costs.
    pub bill_total: Money,

    /// Each person's share of the even-split charge.
    pub even_split_per_person: Money,

    pub rates: SplitRates,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_proportion_rounds_to_whole_percent() {
        // 3.50 / 35.00 = 0.10
        let tax = Rate::proportion(Money::from_cents(350), Money::from_cents(3500));
        assert_eq!(tax.bps(), 1000);
        assert!((tax.percentage() - 10.0).abs() < f64::EPSILON);

        // 1.00 / 8.00 = 0.125 -> 0.13
        let rounded_up = Rate::proportion(Money::from_cents(100), Money::from_cents(800));
        assert_eq!(rounded_up.bps(), 1300);
    }

    #[test]
    fn test_rate_proportion_zero_whole() {
        assert_eq!(Rate::proportion(Money::from_cents(350), Money::zero()), Rate::zero());
    }

    #[test]
    fn test_rate_proportion_negative_part() {
        // -1.00 / 8.00 = -0.125 -> -0.13
        let rate = Rate::proportion(Money::from_cents(-100), Money::from_cents(800));
        assert_eq!(rate.bps(), -1300);
    }

    #[test]
    fn test_person_subtotal() {
        let mut bill = PersonBill::new(BillId::new(0));
        assert!(bill.subtotal().is_zero());
        assert!(bill.name.is_empty());

        bill.item_costs = vec![Money::from_cents(10), Money::from_cents(20)];
        assert_eq!(bill.subtotal().cents(), 30);
    }

    #[test]
    fn test_shared_costs_absent_is_zero() {
        let costs = SharedCosts::default();
        for kind in SharedCostKind::ALL {
            assert_eq!(costs.entered(kind), None);
            assert!(costs.amount(kind).is_zero());
        }
        assert!(costs.total().is_zero());
    }

    #[test]
    fn test_shared_costs_with_is_copy_on_write() {
        let empty = SharedCosts::default();
        let with_tip = empty.with(SharedCostKind::Tip, Some(Money::from_cents(500)));

        assert_eq!(empty.tip, None);
        assert_eq!(with_tip.tip, Some(Money::from_cents(500)));
        assert_eq!(with_tip.total().cents(), 500);

        let cleared = with_tip.with(SharedCostKind::Tip, None);
        assert_eq!(cleared, empty);
    }

    #[test]
    fn test_rate_proportion_clamps_extreme_ratios() {
        let rate = Rate::proportion(Money::from_cents(i64::MAX), Money::from_cents(1));
        assert_eq!(rate.bps(), i64::MAX);

        let rate = Rate::proportion(Money::from_cents(i64::MIN), Money::from_cents(1));
        assert_eq!(rate.bps(), i64::MIN);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let bill = PersonBill::new(BillId::new(3));
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json.get("itemCosts").is_some());

        let kind = serde_json::to_value(SharedCostKind::EvenSplit).unwrap();
        assert_eq!(kind, "even_split");
    }
}
