// Marketplace - Query Operations
// Read-only lookups; none of these mutate state.

use crate::crypto::Address;
use crate::market::{Listing, MarketError, MarketResult, MarketStorage};

/// Look up a registered land inspector by registry index
pub fn registered_land_inspectors<M: MarketStorage + ?Sized>(
    market: &M,
    index: u64,
) -> MarketResult<Address> {
    market
        .get_inspector(index)
        .ok_or(MarketError::InspectorNotFound)
}

/// Number of registered inspectors
pub fn inspector_count<M: MarketStorage + ?Sized>(market: &M) -> u64 {
    market.get_state().next_inspector_index.saturating_sub(1)
}

/// Look up a listing by id
pub fn listing<M: MarketStorage + ?Sized>(market: &M, id: u64) -> MarketResult<Listing> {
    market.get_listing(id).ok_or(MarketError::ListingNotFound)
}

/// Number of listings ever created
pub fn listing_count<M: MarketStorage + ?Sized>(market: &M) -> u64 {
    market.get_state().next_listing_id.saturating_sub(1)
}

/// Address of the bound property registry
pub fn nft_address<M: MarketStorage + ?Sized>(market: &M) -> Address {
    market.get_state().nft_address
}

/// Address of the marketplace instance itself
pub fn market_address<M: MarketStorage + ?Sized>(market: &M) -> Address {
    market.get_state().market_address
}

/// Marketplace owner address
pub fn owner<M: MarketStorage + ?Sized>(market: &M) -> Address {
    market.get_state().owner
}
