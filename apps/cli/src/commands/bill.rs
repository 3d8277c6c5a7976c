//! # Bill Commands
//!
//! Whole-bill actions: showing the current bill, calculating the split and
//! starting over.

use serde::Serialize;
use tabsplit_core::{BillCommand, BillId, BillStore, Money, SharedCosts};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{BillState, CalculatedSplit};

/// One person as listed on screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: BillId,
    pub name: String,
    pub item_costs: Vec<Money>,
    pub subtotal: Money,
}

/// The bill as the user currently sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub people: Vec<PersonSummary>,
    pub shared_costs: SharedCosts,
    pub open_editor: Option<BillId>,
    pub food_and_drink_total: Money,
}

impl From<&BillStore> for BillResponse {
    fn from(store: &BillStore) -> Self {
        BillResponse {
            people: store
                .bills()
                .iter()
                .map(|bill| PersonSummary {
                    id: bill.id,
                    name: bill.name.clone(),
                    item_costs: bill.item_costs.clone(),
                    subtotal: bill.subtotal(),
                })
                .collect(),
            shared_costs: store.shared_costs().clone(),
            open_editor: store.open_editor(),
            food_and_drink_total: store.food_and_drink_total(),
        }
    }
}

/// Gets the current bill.
pub fn get_bill(state: &BillState) -> BillResponse {
    debug!("get_bill command");
    BillResponse::from(state.store())
}

/// Calculates what everybody owes.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  > calc                                                                 │
/// │                                                                         │
/// │  Individual                     Total Owed                              │
/// │  Alice                              $23.60                              │
/// │  Bob                                $29.80                              │
/// │  Entire bill                        $53.50                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn calculate_split(state: &mut BillState) -> CalculatedSplit {
    debug!("calculate_split command");

    if state.store().food_and_drink_total().is_zero() && !state.store().is_empty() {
        info!("No food or drink entered yet; percentage-based costs are not apportioned");
    }

    let split = state.calculate().clone();
    info!(
        people = split.summary.individuals.len(),
        bill_total = %split.summary.bill_total,
        "Split calculated"
    );
    split
}

/// Clears every person and shared cost.
pub fn reset(state: &mut BillState) -> Result<BillResponse, ApiError> {
    debug!("reset command");
    let store = state.dispatch(BillCommand::Reset)?;
    Ok(BillResponse::from(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_core::SharedCostKind;

    fn cents(amount: i64) -> Money {
        Money::from_cents(amount)
    }

    fn reference_state() -> BillState {
        let mut state = BillState::new();
        for _ in 0..2 {
            state.dispatch(BillCommand::AddPerson).unwrap();
        }
        for (id, amount) in [(0, 1000), (0, 500), (1, 2000)] {
            state
                .dispatch(BillCommand::AddItemCost {
                    id: BillId::new(id),
                    amount: cents(amount),
                })
                .unwrap();
        }
        for (kind, amount) in [
            (SharedCostKind::Tax, 350),
            (SharedCostKind::Tip, 500),
            (SharedCostKind::EvenSplit, 1000),
        ] {
            state
                .dispatch(BillCommand::SetSharedCost {
                    kind,
                    amount: Some(cents(amount)),
                })
                .unwrap();
        }
        state
    }

    #[test]
    fn test_get_bill_lists_subtotals() {
        let response = get_bill(&reference_state());

        assert_eq!(response.people.len(), 2);
        assert_eq!(response.people[0].subtotal, cents(1500));
        assert_eq!(response.people[1].subtotal, cents(2000));
        assert_eq!(response.food_and_drink_total, cents(3500));
        assert_eq!(response.shared_costs.other, None);
    }

    #[test]
    fn test_calculate_split_reference_bill() {
        let mut state = reference_state();
        let split = calculate_split(&mut state);

        let totals: Vec<i64> = split
            .summary
            .individuals
            .iter()
            .map(|i| i.total.cents())
            .collect();
        assert_eq!(totals, vec![2360, 2980]);
        assert_eq!(split.summary.bill_total, cents(5350));
        assert!(state.last_split().is_some());
    }

    #[test]
    fn test_reset_then_calculate() {
        let mut state = reference_state();
        let response = reset(&mut state).unwrap();

        assert!(response.people.is_empty());
        assert_eq!(state.store().next_id(), BillId::new(0));

        let split = calculate_split(&mut state);
        assert!(split.summary.individuals.is_empty());
        assert!(split.summary.bill_total.is_zero());
    }
}
