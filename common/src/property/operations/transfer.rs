// Property Registry - Transfer Operation

use crate::crypto::Address;
use crate::property::{PropertyError, PropertyResult, PropertyStorage};

use super::validation::{validate_address, validate_token_id};
use super::{check_transfer_permission, RuntimeContext};

/// Transfer a token from its current owner to a new owner
///
/// The caller must be the owner or the approved spender. Any approval on
/// the token is cleared by a successful transfer.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller, block height)
/// - `from`: Expected current owner
/// - `to`: New owner address
/// - `token_id`: Token ID
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(PropertyError)`: Error code
pub fn transfer_from<S: PropertyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    token_id: u64,
) -> PropertyResult<()> {
    // Step 1: Input validation
    validate_token_id(token_id)?;
    validate_address(to)?;

    // Step 2: Get token
    let mut token = storage
        .get_token(token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    // Step 3: Business rules
    // 3.1 `from` must be the current owner
    if token.owner != *from {
        return Err(PropertyError::NotOwner);
    }

    // 3.2 Self-transfer not allowed
    if token.owner == *to {
        return Err(PropertyError::SelfTransfer);
    }

    // Step 4: Permission check (owner or approved spender)
    check_transfer_permission(&token, &ctx.caller)?;

    // Step 5: Execute transfer
    let previous_owner = token.owner;
    token.owner = *to;

    // Approval does not survive a change of ownership
    token.clear_approval();

    storage.set_token(&token)?;
    storage.decrement_balance(&previous_owner)?;
    storage.increment_balance(to)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::approve::approve;
    use super::super::mint::mint;
    use super::*;
    use crate::property::{MemoryPropertyStorage, PropertyCollection};

    fn setup() -> (MemoryPropertyStorage, Address, u64) {
        let mut storage = MemoryPropertyStorage::new(PropertyCollection::new(
            "Properties".to_string(),
            "DREAM".to_string(),
            1,
        ));
        let seller = Address::new([2u8; 32]);
        let ctx = RuntimeContext::new(seller, 100);
        let token_id = mint(&mut storage, &ctx, "uri".to_string()).unwrap();
        (storage, seller, token_id)
    }

    #[test]
    fn test_transfer_by_owner() {
        let (mut storage, seller, token_id) = setup();
        let buyer = Address::new([1u8; 32]);

        let ctx = RuntimeContext::new(seller, 101);
        transfer_from(&mut storage, &ctx, &seller, &buyer, token_id).unwrap();

        let token = storage.get_token(token_id).unwrap();
        assert_eq!(token.owner, buyer);
        assert_eq!(storage.get_balance(&seller), 0);
        assert_eq!(storage.get_balance(&buyer), 1);
    }

    #[test]
    fn test_transfer_by_approved_spender_clears_approval() {
        let (mut storage, seller, token_id) = setup();
        let marketplace = Address::new([11u8; 32]);

        let ctx = RuntimeContext::new(seller, 101);
        approve(&mut storage, &ctx, &marketplace, token_id).unwrap();

        let ctx = RuntimeContext::new(marketplace, 102);
        transfer_from(&mut storage, &ctx, &seller, &marketplace, token_id).unwrap();

        let token = storage.get_token(token_id).unwrap();
        assert_eq!(token.owner, marketplace);
        assert_eq!(token.approved, None);
    }

    #[test]
    fn test_transfer_without_approval_fails() {
        let (mut storage, seller, token_id) = setup();
        let marketplace = Address::new([11u8; 32]);

        let ctx = RuntimeContext::new(marketplace, 101);
        let result = transfer_from(&mut storage, &ctx, &seller, &marketplace, token_id);
        assert_eq!(result, Err(PropertyError::NotApproved));

        // Ownership unchanged
        assert_eq!(storage.get_token(token_id).unwrap().owner, seller);
    }

    #[test]
    fn test_transfer_wrong_from_fails() {
        let (mut storage, seller, token_id) = setup();
        let stranger = Address::new([9u8; 32]);
        let buyer = Address::new([1u8; 32]);

        let ctx = RuntimeContext::new(seller, 101);
        let result = transfer_from(&mut storage, &ctx, &stranger, &buyer, token_id);
        assert_eq!(result, Err(PropertyError::NotOwner));
    }

    #[test]
    fn test_transfer_to_self_fails() {
        let (mut storage, seller, token_id) = setup();
        let ctx = RuntimeContext::new(seller, 101);
        let result = transfer_from(&mut storage, &ctx, &seller, &seller, token_id);
        assert_eq!(result, Err(PropertyError::SelfTransfer));
    }

    #[test]
    fn test_transfer_unknown_token_fails() {
        let (mut storage, seller, _token_id) = setup();
        let buyer = Address::new([1u8; 32]);
        let ctx = RuntimeContext::new(seller, 101);
        let result = transfer_from(&mut storage, &ctx, &seller, &buyer, 42);
        assert_eq!(result, Err(PropertyError::TokenNotFound));
    }
}
