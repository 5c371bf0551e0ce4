// Property Registry - Query Operations
// Read-only lookups; none of these mutate state.

use crate::crypto::Address;
use crate::property::{PropertyError, PropertyResult, PropertyStorage};

/// Get the owner of a token
///
/// # Returns
/// - `Ok(Address)`: Current owner
/// - `Err(PropertyError::TokenNotFound)`: Id was never minted
pub fn owner_of<S: PropertyStorage + ?Sized>(
    storage: &S,
    token_id: u64,
) -> PropertyResult<Address> {
    if token_id == 0 {
        return Err(PropertyError::TokenNotFound);
    }

    let token = storage
        .get_token(token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    Ok(token.owner)
}

/// Get the immutable metadata URI of a token
pub fn token_uri<S: PropertyStorage + ?Sized>(storage: &S, token_id: u64) -> PropertyResult<String> {
    let token = storage
        .get_token(token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    Ok(token.metadata_uri)
}

/// Get the approved spender of a token, if any
pub fn get_approved<S: PropertyStorage + ?Sized>(
    storage: &S,
    token_id: u64,
) -> PropertyResult<Option<Address>> {
    let token = storage
        .get_token(token_id)
        .ok_or(PropertyError::TokenNotFound)?;

    Ok(token.approved)
}

/// Check if a token exists
pub fn exists<S: PropertyStorage + ?Sized>(storage: &S, token_id: u64) -> bool {
    if token_id == 0 {
        return false;
    }
    storage.token_exists(token_id)
}

/// Get the number of tokens currently owned by an address
pub fn balance_of<S: PropertyStorage + ?Sized>(storage: &S, owner: &Address) -> u64 {
    storage.get_balance(owner)
}

/// Get the collection name
pub fn name<S: PropertyStorage + ?Sized>(storage: &S) -> String {
    storage.get_collection().name
}

/// Get the collection symbol
pub fn symbol<S: PropertyStorage + ?Sized>(storage: &S) -> String {
    storage.get_collection().symbol
}

/// Get the current total supply
pub fn total_supply<S: PropertyStorage + ?Sized>(storage: &S) -> u64 {
    storage.get_collection().total_supply
}
