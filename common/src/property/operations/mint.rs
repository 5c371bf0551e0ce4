// Property Registry - Mint Operation

use crate::property::{PropertyResult, PropertyStorage, PropertyToken};

use super::validation::{validate_address, validate_metadata_uri};
use super::RuntimeContext;

/// Mint a new property token to the caller
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller, block height)
/// - `metadata_uri`: Immutable metadata URI (0-512 bytes, no format constraint)
///
/// # Returns
/// - `Ok(u64)`: The new token ID
/// - `Err(PropertyError)`: Error code
pub fn mint<S: PropertyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    metadata_uri: String,
) -> PropertyResult<u64> {
    // Step 1: Input validation
    validate_address(&ctx.caller)?;
    validate_metadata_uri(&metadata_uri)?;

    // Step 2: Allocate token ID
    let mut collection = storage.get_collection();
    let token_id = collection.allocate_token_id()?;
    collection.total_supply = collection
        .total_supply
        .checked_add(1)
        .ok_or(crate::property::PropertyError::Overflow)?;

    // Step 3: Create token
    let token = PropertyToken {
        token_id,
        owner: ctx.caller,
        metadata_uri,
        approved: None,
        created_at: ctx.block_height,
    };

    // Step 4: Store token and updated collection
    storage.set_token(&token)?;
    storage.set_collection(&collection)?;

    // Step 5: Update owner balance
    storage.increment_balance(&ctx.caller)?;

    Ok(token_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Address;
    use crate::property::{MemoryPropertyStorage, PropertyCollection, PropertyError};

    fn new_storage() -> MemoryPropertyStorage {
        MemoryPropertyStorage::new(PropertyCollection::new(
            "Properties".to_string(),
            "DREAM".to_string(),
            1,
        ))
    }

    #[test]
    fn test_mint_success() {
        let mut storage = new_storage();
        let seller = Address::new([2u8; 32]);
        let ctx = RuntimeContext::new(seller, 100);

        let token_id = mint(&mut storage, &ctx, "https://example.com/1.json".to_string()).unwrap();
        assert_eq!(token_id, 1);

        let token = storage.get_token(token_id).unwrap();
        assert_eq!(token.owner, seller);
        assert_eq!(token.metadata_uri, "https://example.com/1.json");
        assert_eq!(token.approved, None);
        assert_eq!(token.created_at, 100);

        let collection = storage.get_collection();
        assert_eq!(collection.total_supply, 1);
        assert_eq!(collection.next_token_id, 2);

        assert_eq!(storage.get_balance(&seller), 1);
    }

    #[test]
    fn test_mint_sequential_token_ids() {
        let mut storage = new_storage();
        let seller = Address::new([2u8; 32]);
        let ctx = RuntimeContext::new(seller, 100);

        let id1 = mint(&mut storage, &ctx, "uri1".to_string()).unwrap();
        let id2 = mint(&mut storage, &ctx, "uri2".to_string()).unwrap();
        let id3 = mint(&mut storage, &ctx, "uri3".to_string()).unwrap();

        assert_eq!((id1, id2, id3), (1, 2, 3));
        assert_eq!(storage.get_collection().total_supply, 3);
        assert_eq!(storage.get_balance(&seller), 3);
    }

    #[test]
    fn test_mint_same_uri_twice() {
        let mut storage = new_storage();
        let seller = Address::new([2u8; 32]);
        let ctx = RuntimeContext::new(seller, 100);

        let uri = "https://ipfs.io/ipfs/QmQUozrHLAusXDxrvsESJ3PYB3rUeUuBAvVWw6nop2uu7c/2.png";
        mint(&mut storage, &ctx, uri.to_string()).unwrap();
        assert_eq!(storage.get_balance(&seller), 1);

        let id = mint(&mut storage, &ctx, uri.to_string()).unwrap();
        assert_eq!(id, 2);
        assert_eq!(storage.get_balance(&seller), 2);
        assert_eq!(storage.get_token(2).unwrap().metadata_uri, uri);
    }

    #[test]
    fn test_mint_uri_too_long_fails() {
        let mut storage = new_storage();
        let ctx = RuntimeContext::new(Address::new([2u8; 32]), 100);

        let uri = "x".repeat(crate::property::MAX_METADATA_URI_LENGTH + 1);
        let result = mint(&mut storage, &ctx, uri);
        assert_eq!(result, Err(PropertyError::UriTooLong));

        // No state change on failure
        assert_eq!(storage.get_collection().total_supply, 0);
        assert_eq!(storage.get_collection().next_token_id, 1);
    }

    #[test]
    fn test_mint_zero_caller_fails() {
        let mut storage = new_storage();
        let ctx = RuntimeContext::new(Address::zero(), 100);
        let result = mint(&mut storage, &ctx, "uri".to_string());
        assert_eq!(result, Err(PropertyError::InvalidRecipient));
    }
}
