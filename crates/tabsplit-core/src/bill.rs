//! # Bill Store
//!
//! The in-memory state the front-end edits: every person's bill, the shared
//! costs, and which person's editor is open.
//!
//! ## Reducer Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Store Updates                                   │
//! │                                                                         │
//! │  User Action             BillCommand                 Store Change       │
//! │  ───────────             ───────────                 ────────────       │
//! │                                                                         │
//! │  Add Individual ───────► AddPerson ────────────────► bills.push(new)    │
//! │  Save name ────────────► RenamePerson { id, name } ► bill.name = name   │
//! │  Save cost ────────────► AddItemCost { id, amount } ► costs.push(amt)   │
//! │  Delete cost ──────────► DeleteItemCost { id, idx } ► costs.remove(idx) │
//! │  Delete person ────────► DeletePerson { id } ──────► bills.remove(id)   │
//! │  Edit tax/tip/... ─────► SetSharedCost { kind, .. } ► shared.kind = amt │
//! │  Reset All ────────────► Reset ────────────────────► empty store        │
//! │                                                                         │
//! │  store.apply(cmd) never touches `store`; it returns the next store.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BillId, PersonBill, SharedCostKind, SharedCosts, SplitSummary};
use crate::validation::validate_person_name;

// =============================================================================
// Commands
// =============================================================================

/// Every way the bill store can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum BillCommand {
    /// Append a new, unnamed person and open their editor.
    AddPerson,

    RenamePerson { id: BillId, name: String },

    AddItemCost { id: BillId, amount: Money },

    /// Remove one item cost. An index past the end is ignored.
    DeleteItemCost { id: BillId, index: usize },

    DeletePerson { id: BillId },

    /// Set one shared cost, or clear it with `None`.
    SetSharedCost {
        kind: SharedCostKind,
        amount: Option<Money>,
    },

    OpenEditor { id: BillId },

    CloseEditor,

    /// Clear everything and restart ids from zero.
    Reset,
}

// =============================================================================
// Store
// =============================================================================

/// The bill store.
///
/// ## Invariants
/// - Ids are unique and strictly increasing in insertion order
/// - `next_id` is greater than every id ever handed out since the last reset,
///   so deleted ids are never reused
/// - `open_editor`, when set, names a person in `bills`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillStore {
    next_id: u32,
    bills: Vec<PersonBill>,
    shared: SharedCosts,
    open_editor: Option<BillId>,
}

impl BillStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every person's bill, in the order they were added.
    pub fn bills(&self) -> &[PersonBill] {
        &self.bills
    }

    /// Looks up one person's bill.
    pub fn bill(&self, id: BillId) -> Option<&PersonBill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn shared_costs(&self) -> &SharedCosts {
        &self.shared
    }

    /// The person whose editor is open, if any.
    pub fn open_editor(&self) -> Option<BillId> {
        self.open_editor
    }

    /// The id the next `AddPerson` will hand out.
    pub fn next_id(&self) -> BillId {
        BillId::new(self.next_id)
    }

    pub fn person_count(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Food and drink across everybody.
    pub fn food_and_drink_total(&self) -> Money {
        self.bills.iter().map(PersonBill::subtotal).sum()
    }

    /// Runs the split calculator over the current values.
    pub fn split(&self) -> SplitSummary {
        calculator::split(&self.bills, &self.shared)
    }

    /// Applies a command and returns the resulting store.
    ///
    /// `self` is left untouched. On error no partial change is visible.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::bill::{BillCommand, BillStore};
    /// use tabsplit_core::money::Money;
    ///
    /// let empty = BillStore::new();
    /// let one = empty.apply(BillCommand::AddPerson).unwrap();
    /// let id = one.bills()[0].id;
    ///
    /// let priced = one
    ///     .apply(BillCommand::AddItemCost { id, amount: Money::from_cents(1250) })
    ///     .unwrap();
    ///
    /// assert!(empty.is_empty());
    /// assert!(one.bills()[0].item_costs.is_empty());
    /// assert_eq!(priced.bills()[0].subtotal().cents(), 1250);
    /// ```
    pub fn apply(&self, command: BillCommand) -> CoreResult<BillStore> {
        match command {
            BillCommand::AddPerson => Ok(self.add_person()),
            BillCommand::RenamePerson { id, name } => {
                let name = validate_person_name(&name)?;
                self.update_bill(id, |bill| bill.name = name)
            }
            BillCommand::AddItemCost { id, amount } => {
                self.update_bill(id, |bill| bill.item_costs.push(amount))
            }
            BillCommand::DeleteItemCost { id, index } => self.update_bill(id, |bill| {
                if index < bill.item_costs.len() {
                    bill.item_costs.remove(index);
                }
            }),
            BillCommand::DeletePerson { id } => self.delete_person(id),
            BillCommand::SetSharedCost { kind, amount } => Ok(BillStore {
                shared: self.shared.with(kind, amount),
                ..self.clone()
            }),
            BillCommand::OpenEditor { id } => {
                self.require(id)?;
                Ok(BillStore {
                    open_editor: Some(id),
                    ..self.clone()
                })
            }
            BillCommand::CloseEditor => Ok(BillStore {
                open_editor: None,
                ..self.clone()
            }),
            BillCommand::Reset => Ok(BillStore::new()),
        }
    }

    fn add_person(&self) -> BillStore {
        let id = BillId::new(self.next_id);
        let mut next = self.clone();
        next.bills.push(PersonBill::new(id));
        next.open_editor = Some(id);
        next.next_id += 1;
        next
    }

    fn delete_person(&self, id: BillId) -> CoreResult<BillStore> {
        self.require(id)?;

        let mut next = self.clone();
        next.bills.retain(|b| b.id != id);
        if next.open_editor == Some(id) {
            next.open_editor = None;
        }
        Ok(next)
    }

    /// Clones the store and edits one bill in the copy.
    fn update_bill<F>(&self, id: BillId, edit: F) -> CoreResult<BillStore>
    where
        F: FnOnce(&mut PersonBill),
    {
        let mut next = self.clone();
        let bill = next
            .bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CoreError::PersonNotFound(id))?;
        edit(bill);
        Ok(next)
    }

    fn require(&self, id: BillId) -> CoreResult<&PersonBill> {
        self.bill(id).ok_or(CoreError::PersonNotFound(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
