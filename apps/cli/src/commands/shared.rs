//! # Shared Cost Commands
//!
//! Tax, tip, other percentage-based costs and even-split costs.

use tabsplit_core::{BillCommand, Money, SharedCostKind};
use tracing::debug;

use super::BillResponse;
use crate::error::ApiError;
use crate::state::BillState;

/// Sets one shared cost, or clears it when `amount` is `None`.
pub fn set_shared_cost(
    state: &mut BillState,
    kind: SharedCostKind,
    amount: Option<Money>,
) -> Result<BillResponse, ApiError> {
    debug!(?kind, ?amount, "set_shared_cost command");

    let store = state.dispatch(BillCommand::SetSharedCost { kind, amount })?;
    Ok(BillResponse::from(store))
}
