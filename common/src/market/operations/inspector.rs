// Marketplace - Inspector Registration

use crate::crypto::Address;
use crate::market::{InspectorAdded, MarketError, MarketResult, MarketStorage};
use crate::property::operations::RuntimeContext;

use super::check_market_owner;

/// Register a land inspector
///
/// Only the marketplace owner may call this; the inspector is appended at
/// the next sequential registry index. Registering the same address twice
/// is allowed and occupies two slots.
///
/// # Parameters
/// - `market`: Marketplace storage backend
/// - `ctx`: Runtime context (caller, block height)
/// - `inspector`: Address to register
///
/// # Returns
/// - `Ok(InspectorAdded)`: The emitted notification, carrying the index
/// - `Err(MarketError)`: Error code
pub fn add_inspector<M: MarketStorage + ?Sized>(
    market: &mut M,
    ctx: &RuntimeContext,
    inspector: &Address,
) -> MarketResult<InspectorAdded> {
    // Step 1: Input validation
    if inspector.is_zero() {
        return Err(MarketError::InvalidInspector);
    }

    // Step 2: Access control
    let mut state = market.get_state();
    check_market_owner(&state, &ctx.caller)?;

    // Step 3: Append at the next index
    let index = state.allocate_inspector_index()?;
    market.set_inspector(index, inspector)?;
    market.set_state(&state)?;

    Ok(InspectorAdded {
        index,
        inspector: *inspector,
    })
}
