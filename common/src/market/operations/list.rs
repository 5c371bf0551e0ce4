// Marketplace - List Operation

use crate::market::{Listing, MarketResult, MarketStorage, Offered};
use crate::property::operations::{transfer_from, validate_token_id, RuntimeContext};
use crate::property::{PropertyError, PropertyStorage};

/// Parameters for listing a property token
#[derive(Clone, Debug)]
pub struct ListParams {
    /// Token ID to put up for sale
    pub token_id: u64,
    /// Asking price in atomic base-currency units
    pub price: u64,
}

/// List a property token for sale
///
/// The caller must currently own the token and must have approved the
/// marketplace address as the token's spender. On success the marketplace
/// takes custody of the token (its owner becomes the marketplace address)
/// and a new listing is recorded.
///
/// # Parameters
/// - `market`: Marketplace storage backend
/// - `registry`: Storage of the bound property registry
/// - `ctx`: Runtime context (caller, block height)
/// - `params`: Listing parameters
///
/// # Returns
/// - `Ok(Offered)`: The emitted offer notification, carrying the listing id
/// - `Err(MarketError)`: Error code
pub fn list<M, P>(
    market: &mut M,
    registry: &mut P,
    ctx: &RuntimeContext,
    params: ListParams,
) -> MarketResult<Offered>
where
    M: MarketStorage + ?Sized,
    P: PropertyStorage + ?Sized,
{
    // Step 1: Input validation
    validate_token_id(params.token_id)?;

    let mut state = market.get_state();

    // Step 2: Get token
    let token = registry
        .get_token(params.token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    // Step 3: Business rules
    // 3.1 Only the current owner may list
    if token.owner != ctx.caller {
        return Err(PropertyError::NotOwner.into());
    }

    // 3.2 The marketplace must have been approved as spender beforehand
    if token.approved != Some(state.market_address) {
        return Err(PropertyError::NotApproved.into());
    }

    // Step 4: Allocate listing ID before touching the registry, so the
    // allocation failure path leaves custody untouched
    let listing_id = state.allocate_listing_id()?;

    // Step 5: Take custody, acting as the approved spender
    let custody_ctx = RuntimeContext::new(state.market_address, ctx.block_height);
    transfer_from(
        registry,
        &custody_ctx,
        &ctx.caller,
        &state.market_address,
        params.token_id,
    )?;

    // Step 6: Record the listing
    let listing = Listing {
        id: listing_id,
        token_contract: state.nft_address,
        token_id: params.token_id,
        price: params.price,
        seller: ctx.caller,
        created_at: ctx.block_height,
    };
    market.set_listing(&listing)?;
    market.set_state(&state)?;

    // Step 7: Emit the offer notification
    Ok(Offered {
        listing_id,
        token_contract: state.nft_address,
        token_id: params.token_id,
        price: params.price,
        seller: ctx.caller,
    })
}
