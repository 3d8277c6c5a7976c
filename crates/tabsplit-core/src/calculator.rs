//! # Split Calculator
//!
//! Turns the bill store's values into what each person owes.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal(p)        = Σ p.item_costs                  (exact cents)  │
//! │     food_and_drink     = Σ subtotal(p)                                  │
//! │                                                                         │
//! │  2. rate(k)            = round2(shared[k] / food_and_drink)             │
//! │                          for k in tax, tip, other; 0 if no food/drink   │
//! │                                                                         │
//! │  3. even_share         = even_split / max(people, 1)                    │
//! │                                                                         │
//! │  4. total(p)           = round(subtotal(p) + even_split / max(n, 1)     │
//! │                          + Σ_k rate(k) × subtotal(p))                   │
//! │                                                                         │
//! │  5. bill_total         = food_and_drink + tax + tip + other + even      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 4 is evaluated exactly over a common denominator and rounded to the
//! cent once, half away from zero. `even_share` in the summary is the
//! rounded share for display; totals use the exact fraction. Rates are
//! rounded to whole percents before they are applied, so the individual
//! totals need not add up to `bill_total` exactly.

use crate::money::{div_round_half_away, Money};
use crate::types::{IndividualTotal, PersonBill, Rate, SharedCostKind, SharedCosts, SplitRates, SplitSummary};

/// Splits the shared costs across `bills`.
///
/// Never fails and never panics: an empty bill list or a zero
/// food-and-drink total produces zero rates.
///
/// ## Example
/// ```rust
/// use tabsplit_core::calculator::split;
/// use tabsplit_core::money::Money;
/// use tabsplit_core::types::{BillId, PersonBill, SharedCosts};
///
/// let mut alice = PersonBill::new(BillId::new(0));
/// alice.name = "Alice".to_string();
/// alice.item_costs = vec![Money::from_cents(2000)];
///
/// let shared = SharedCosts {
///     tip: Some(Money::from_cents(400)),
///     ..SharedCosts::default()
/// };
///
/// let summary = split(&[alice], &shared);
/// assert_eq!(summary.individuals[0].total.cents(), 2400);
/// assert_eq!(summary.bill_total.cents(), 2400);
/// ```
pub fn split(bills: &[PersonBill], shared: &SharedCosts) -> SplitSummary {
    let subtotals: Vec<Money> = bills.iter().map(PersonBill::subtotal).collect();
    let food_and_drink_total: Money = subtotals.iter().sum();

    let rates = SplitRates {
        tax: Rate::proportion(shared.amount(SharedCostKind::Tax), food_and_drink_total),
        tip: Rate::proportion(shared.amount(SharedCostKind::Tip), food_and_drink_total),
        other: Rate::proportion(shared.amount(SharedCostKind::Other), food_and_drink_total),
    };

    let even_split = shared.amount(SharedCostKind::EvenSplit);
    let even_split_per_person = even_split.split_evenly(bills.len());

    let individuals = bills
        .iter()
        .zip(subtotals)
        .map(|(bill, subtotal)| IndividualTotal {
            id: bill.id,
            name: bill.name.clone(),
            subtotal,
            total: individual_total(subtotal, even_split, bills.len(), &rates),
        })
        .collect();

    SplitSummary {
        individuals,
        food_and_drink_total,
        bill_total: food_and_drink_total + shared.total(),
        even_split_per_person,
        rates,
    }
}

/// `subtotal × (1 + rates) + even_split / people`, rounded once.
///
/// Everything is scaled to `10_000 × people` so the sum stays exact in
/// i128; saturating ops keep absurd inputs from overflowing.
fn individual_total(subtotal: Money, even_split: Money, people: usize, rates: &SplitRates) -> Money {
    let people = people.max(1) as i128;
    let rate_bps = 10_000 + rates.tax.bps() as i128 + rates.tip.bps() as i128 + rates.other.bps() as i128;

    let numerator = (subtotal.cents() as i128)
        .saturating_mul(rate_bps)
        .saturating_mul(people)
        .saturating_add((even_split.cents() as i128).saturating_mul(10_000));

    Money::from_cents_saturating(div_round_half_away(numerator, 10_000 * people))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillId;

    fn person(id: u32, name: &str, costs: &[i64]) -> PersonBill {
        PersonBill {
            id: BillId::new(id),
            name: name.to_string(),
            item_costs: costs.iter().copied().map(Money::from_cents).collect(),
        }
    }

    fn shared(tax: i64, tip: i64, other: i64, even: i64) -> SharedCosts {
        SharedCosts {
            tax: Some(Money::from_cents(tax)),
            tip: Some(Money::from_cents(tip)),
            other: Some(Money::from_cents(other)),
            even_split: Some(Money::from_cents(even)),
        }
    }

    /// A [$10, $5], B [$20]; tax $3.50, tip $5, other $0, even $10.
    #[test]
    fn test_two_person_reference_split() {
        let bills = vec![person(0, "A", &[1000, 500]), person(1, "B", &[2000])];
        let summary = split(&bills, &shared(350, 500, 0, 1000));

        assert_eq!(summary.food_and_drink_total.cents(), 3500);
        assert_eq!(summary.rates.tax.bps(), 1000);
        assert_eq!(summary.rates.tip.bps(), 1400);
        assert!(summary.rates.other.is_zero());
        assert_eq!(summary.even_split_per_person.cents(), 500);

        assert_eq!(summary.individuals[0].name, "A");
        assert_eq!(summary.individuals[0].subtotal.cents(), 1500);
        assert_eq!(summary.individuals[0].total.cents(), 2360);

        assert_eq!(summary.individuals[1].name, "B");
        assert_eq!(summary.individuals[1].subtotal.cents(), 2000);
        assert_eq!(summary.individuals[1].total.cents(), 2980);

        assert_eq!(summary.bill_total.cents(), 5350);
    }

    #[test]
    fn test_absent_shared_costs_are_zero() {
        let bills = vec![person(0, "A", &[1234])];
        let summary = split(&bills, &SharedCosts::default());

        assert_eq!(summary.rates, SplitRates::default());
        assert_eq!(summary.individuals[0].total.cents(), 1234);
        assert_eq!(summary.bill_total.cents(), 1234);
    }

    #[test]
    fn test_no_people_does_not_divide_by_zero() {
        let summary = split(&[], &shared(350, 500, 100, 1000));

        assert!(summary.individuals.is_empty());
        assert!(summary.food_and_drink_total.is_zero());
        assert_eq!(summary.rates, SplitRates::default());
        // Even split with nobody to share it is divided by one
        assert_eq!(summary.even_split_per_person.cents(), 1000);
        assert_eq!(summary.bill_total.cents(), 1950);
    }

    #[test]
    fn test_people_without_costs_get_only_even_share() {
        let bills = vec![person(0, "A", &[]), person(1, "B", &[])];
        let summary = split(&bills, &shared(350, 500, 0, 1000));

        assert!(summary.rates.tax.is_zero());
        for individual in &summary.individuals {
            assert_eq!(individual.total.cents(), 500);
        }
    }

    #[test]
    fn test_individuals_keep_input_order() {
        let bills = vec![
            person(4, "Zed", &[100]),
            person(1, "Amy", &[200]),
            person(9, "Max", &[300]),
        ];
        let summary = split(&bills, &SharedCosts::default());

        let names: Vec<&str> = summary.individuals.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
        let ids: Vec<u32> = summary.individuals.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![4, 1, 9]);
    }

    /// Rate products and the even share are fractions of a cent here; the
    /// total adds them exactly and rounds once.
    #[test]
    fn test_total_is_rounded_once() {
        let bills = vec![person(0, "A", &[5]), person(1, "B", &[995])];
        let summary = split(&bills, &shared(100, 100, 0, 0));

        assert_eq!(summary.rates.tax.bps(), 1000);
        assert_eq!(summary.rates.tip.bps(), 1000);
        // 0.05 + 0.005 + 0.005 = 0.06
        assert_eq!(summary.individuals[0].total.cents(), 6);
        // 9.95 + 0.995 + 0.995 = 11.94
        assert_eq!(summary.individuals[1].total.cents(), 1194);
    }

    #[test]
    fn test_even_share_is_not_rounded_before_adding() {
        // $0.10 even split three ways: 3.33 cents each
        let bills = vec![person(0, "A", &[]), person(1, "B", &[]), person(2, "C", &[])];
        let summary = split(&bills, &shared(0, 0, 0, 10));
        assert_eq!(summary.even_split_per_person.cents(), 3);
        for individual in &summary.individuals {
            assert_eq!(individual.total.cents(), 3);
        }

        // A's 40% tax is 0.4 cents and the even share 0.25 cents: 1.65 -> 2
        let bills = vec![
            person(0, "A", &[1]),
            person(1, "B", &[4]),
            person(2, "C", &[]),
            person(3, "D", &[]),
        ];
        let summary = split(&bills, &shared(2, 0, 0, 1));
        assert_eq!(summary.rates.tax.bps(), 4000);
        assert_eq!(summary.even_split_per_person.cents(), 0);
        assert_eq!(summary.individuals[0].total.cents(), 2);
        // 4 + 1.6 + 0.25 = 5.85 -> 6
        assert_eq!(summary.individuals[1].total.cents(), 6);
        // 0.25 -> 0
        assert_eq!(summary.individuals[2].total.cents(), 0);
    }

    #[test]
    fn test_extreme_amounts_do_not_panic() {
        let bills = vec![
            person(0, "A", &[i64::MAX, i64::MAX]),
            person(1, "B", &[1]),
        ];
        let summary = split(&bills, &shared(i64::MAX, i64::MAX, i64::MIN, i64::MAX));

        assert_eq!(summary.food_and_drink_total.cents(), i64::MAX);
        assert_eq!(summary.individuals[0].subtotal.cents(), i64::MAX);
        assert_eq!(summary.individuals.len(), 2);
    }

    /// Whole-percent rates mean the shares can drift from the raw tip.
    #[test]
    fn test_rounded_rate_drift_documented() {
        let bills = vec![person(0, "A", &[1500]), person(1, "B", &[2000])];
        let summary = split(&bills, &shared(0, 500, 0, 0));

        let owed: Money = summary.individuals.iter().map(|i| i.total).sum();
        // 14% of $35.00 is $4.90, not the $5.00 tip that was entered
        assert_eq!(owed.cents(), 3990);
        assert_eq!(summary.bill_total.cents(), 4000);
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        let bills = vec![person(0, "A", &[1000])];
        let summary = split(&bills, &shared(0, 0, -100, 0));

        assert_eq!(summary.rates.other.bps(), -1000);
        assert_eq!(summary.individuals[0].total.cents(), 900);
        assert_eq!(summary.bill_total.cents(), 900);
    }
}
