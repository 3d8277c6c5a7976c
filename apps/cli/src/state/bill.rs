//! # Bill State
//!
//! Holds the current bill store and the most recent split.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(cmd) ──► store.apply(cmd) ──► Ok(next) ──► store = next       │
//! │                                    │                 last_split = None  │
//! │                                    └──► Err(e) ────► nothing changes    │
//! │                                                                         │
//! │  dispatch_all([cmd, ..]) ──► every cmd applied to a copy, then the      │
//! │                              copy replaces the store; any Err: nothing  │
//! │                                                                         │
//! │  calculate() ───► store.split() ──► last_split = Some(split)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A split describes the store as it was when calculated, so any edit
//! drops it rather than leaving stale totals on screen.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabsplit_core::{BillCommand, BillId, BillStore, CoreResult, SplitSummary};

/// A split together with when it was calculated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedSplit {
    pub summary: SplitSummary,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct BillState {
    store: BillStore,
    last_split: Option<CalculatedSplit>,
}

impl BillState {
    /// Creates state with an empty bill store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bill store.
    pub fn store(&self) -> &BillStore {
        &self.store
    }

    /// The split from the last `calculate`, unless something changed since.
    pub fn last_split(&self) -> Option<&CalculatedSplit> {
        self.last_split.as_ref()
    }

    /// Applies a command, replacing the store on success.
    pub fn dispatch(&mut self, command: BillCommand) -> CoreResult<&BillStore> {
        let next = self.store.apply(command)?;
        self.store = next;
        self.last_split = None;
        Ok(&self.store)
    }

    /// Applies several commands as one change: either all of them take
    /// effect or, if any fails, none do.
    pub fn dispatch_all<I>(&mut self, commands: I) -> CoreResult<&BillStore>
    where
        I: IntoIterator<Item = BillCommand>,
    {
        let next = commands
            .into_iter()
            .try_fold(self.store.clone(), |store, command| store.apply(command))?;
        self.store = next;
        self.last_split = None;
        Ok(&self.store)
    }

    /// Runs the split over the current store and remembers the result.
    pub fn calculate(&mut self) -> &CalculatedSplit {
        self.last_split.insert(CalculatedSplit {
            summary: self.store.split(),
            calculated_at: Utc::now(),
        })
    }

    /// Resolves which person a command targets: the explicit id if one was
    /// given, otherwise the person whose editor is open.
    pub fn target(&self, explicit: Option<BillId>) -> Option<BillId> {
        explicit.or_else(|| self.store.open_editor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_core::{CoreError, Money};

    #[test]
    fn test_dispatch_replaces_store() {
        let mut state = BillState::new();
        state.dispatch(BillCommand::AddPerson).unwrap();
        state.dispatch(BillCommand::AddPerson).unwrap();

        assert_eq!(state.store().person_count(), 2);
        assert_eq!(state.store().open_editor(), Some(BillId::new(1)));
    }

    #[test]
    fn test_failed_dispatch_keeps_state() {
        let mut state = BillState::new();
        state.dispatch(BillCommand::AddPerson).unwrap();
        state.calculate();

        let result = state.dispatch(BillCommand::DeletePerson { id: BillId::new(5) });
        assert!(matches!(result, Err(CoreError::PersonNotFound(_))));
        assert_eq!(state.store().person_count(), 1);
        assert!(state.last_split().is_some());
    }

    #[test]
    fn test_dispatch_all_is_all_or_nothing() {
        let mut state = BillState::new();
        state.dispatch(BillCommand::AddPerson).unwrap();
        state.calculate();

        let result = state.dispatch_all([
            BillCommand::AddPerson,
            BillCommand::RenamePerson {
                id: BillId::new(1),
                name: "x".repeat(100),
            },
        ]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(state.store().person_count(), 1);
        assert_eq!(state.store().open_editor(), Some(BillId::new(0)));
        assert!(state.last_split().is_some());

        state
            .dispatch_all([
                BillCommand::AddPerson,
                BillCommand::RenamePerson {
                    id: BillId::new(1),
                    name: "Bob".to_string(),
                },
            ])
            .unwrap();
        assert_eq!(state.store().person_count(), 2);
        assert_eq!(state.store().bills()[1].name, "Bob");
        assert!(state.last_split().is_none());
    }

    #[test]
    fn test_edit_drops_last_split() {
        let mut state = BillState::new();
        state.dispatch(BillCommand::AddPerson).unwrap();
        state.calculate();
        assert!(state.last_split().is_some());

        state
            .dispatch(BillCommand::AddItemCost {
                id: BillId::new(0),
                amount: Money::from_cents(100),
            })
            .unwrap();
        assert!(state.last_split().is_none());
    }

    #[test]
    fn test_target_prefers_explicit_id() {
        let mut state = BillState::new();
        assert_eq!(state.target(None), None);

        state.dispatch(BillCommand::AddPerson).unwrap();
        assert_eq!(state.target(None), Some(BillId::new(0)));
        assert_eq!(state.target(Some(BillId::new(7))), Some(BillId::new(7)));
    }
}
