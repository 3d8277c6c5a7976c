//! # Person Commands
//!
//! Adding people and editing what each of them ordered.
//!
//! ## Editor Targeting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > add              ──► person #0 created, #0's editor opens            │
//! │  > name Alice       ──► no id given: targets the open editor (#0)       │
//! │  > cost 12.50       ──► same                                            │
//! │  > cost 1 8         ──► id given: targets #1 whatever is open           │
//! │  > done             ──► editor closes; `cost 12.50` now errors          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tabsplit_core::{BillCommand, BillId, Money};
use tracing::debug;

use super::BillResponse;
use crate::error::ApiError;
use crate::state::BillState;

fn resolve(state: &BillState, id: Option<BillId>) -> Result<BillId, ApiError> {
    state.target(id).ok_or_else(ApiError::no_editor_open)
}

/// Adds a person, optionally naming them straight away.
///
/// The new person's editor is opened either way. A name that fails
/// validation leaves the bill untouched.
pub fn add_person(state: &mut BillState, name: Option<String>) -> Result<BillResponse, ApiError> {
    debug!(name = ?name, "add_person command");

    let id = state.store().next_id();
    let rename = name.map(|name| BillCommand::RenamePerson { id, name });
    state.dispatch_all(std::iter::once(BillCommand::AddPerson).chain(rename))?;

    Ok(BillResponse::from(state.store()))
}

/// Sets a person's name.
pub fn rename_person(
    state: &mut BillState,
    id: Option<BillId>,
    name: String,
) -> Result<BillResponse, ApiError> {
    let id = resolve(state, id)?;
    debug!(%id, name = %name, "rename_person command");

    let store = state.dispatch(BillCommand::RenamePerson { id, name })?;
    Ok(BillResponse::from(store))
}

/// Appends an item cost to a person's bill.
pub fn add_item_cost(
    state: &mut BillState,
    id: Option<BillId>,
    amount: Money,
) -> Result<BillResponse, ApiError> {
    let id = resolve(state, id)?;
    debug!(%id, %amount, "add_item_cost command");

    let store = state.dispatch(BillCommand::AddItemCost { id, amount })?;
    Ok(BillResponse::from(store))
}

/// Removes one item cost by its zero-based position.
///
/// A position past the end leaves the bill as it was.
pub fn delete_item_cost(
    state: &mut BillState,
    id: Option<BillId>,
    index: usize,
) -> Result<BillResponse, ApiError> {
    let id = resolve(state, id)?;
    debug!(%id, index, "delete_item_cost command");

    let store = state.dispatch(BillCommand::DeleteItemCost { id, index })?;
    Ok(BillResponse::from(store))
}

/// Removes a person from the bill.
pub fn delete_person(state: &mut BillState, id: BillId) -> Result<BillResponse, ApiError> {
    debug!(%id, "delete_person command");

    let store = state.dispatch(BillCommand::DeletePerson { id })?;
    Ok(BillResponse::from(store))
}

/// Opens a person's editor.
pub fn open_editor(state: &mut BillState, id: BillId) -> Result<BillResponse, ApiError> {
    debug!(%id, "open_editor command");

    let store = state.dispatch(BillCommand::OpenEditor { id })?;
    Ok(BillResponse::from(store))
}

/// Closes whichever editor is open.
pub fn close_editor(state: &mut BillState) -> Result<BillResponse, ApiError> {
    debug!("close_editor command");

    let store = state.dispatch(BillCommand::CloseEditor)?;
    Ok(BillResponse::from(store))
}
