// Marketplace Operations
// Core business logic for listing and inspector registration.
//
// Operations take the marketplace storage and, where custody moves, the
// bound property registry's storage. The caller identity comes in through
// the same RuntimeContext the registry operations use. All preconditions
// are checked before the first write.

mod inspector;
mod list;
mod query;

pub use inspector::*;
pub use list::*;
pub use query::*;

use crate::crypto::Address;
use crate::market::{MarketError, MarketResult, MarketState};

/// Check that the caller is the marketplace owner.
/// Inspector registration is the only owner-gated operation in scope.
pub fn check_market_owner(state: &MarketState, caller: &Address) -> MarketResult<()> {
    if state.owner != *caller {
        return Err(MarketError::AccessDenied);
    }
    Ok(())
}
