// Property Registry - Approve Operation

use crate::crypto::Address;
use crate::property::{PropertyError, PropertyResult, PropertyStorage};

use super::validation::{validate_address, validate_token_id};
use super::RuntimeContext;

/// Approve a single spender to transfer a token on the owner's behalf
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller, block height)
/// - `spender`: Address allowed to transfer the token
/// - `token_id`: Token ID
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(PropertyError)`: Error code
pub fn approve<S: PropertyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    spender: &Address,
    token_id: u64,
) -> PropertyResult<()> {
    // Step 1: Input validation
    validate_token_id(token_id)?;
    validate_address(spender)?;

    // Step 2: Get token
    let mut token = storage
        .get_token(token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    // Step 3: Only the current owner may approve
    if token.owner != ctx.caller {
        return Err(PropertyError::NotOwner);
    }

    // Step 4: Approving the owner itself is meaningless
    if token.owner == *spender {
        return Err(PropertyError::SelfApproval);
    }

    // Step 5: Record the approval, replacing any previous spender
    token.approved = Some(*spender);
    storage.set_token(&token)?;

    Ok(())
}
