// Property Registry - Input Validation

use crate::crypto::Address;
use crate::property::{PropertyError, PropertyResult, MAX_METADATA_URI_LENGTH};

/// Validate a token ID (0 is never a valid id)
pub fn validate_token_id(token_id: u64) -> PropertyResult<()> {
    if token_id == 0 {
        return Err(PropertyError::InvalidTokenId);
    }
    Ok(())
}

/// Validate a metadata URI.
/// Only the length is bounded; no format constraint is enforced.
pub fn validate_metadata_uri(uri: &str) -> PropertyResult<()> {
    if uri.len() > MAX_METADATA_URI_LENGTH {
        return Err(PropertyError::UriTooLong);
    }
    Ok(())
}

/// Validate a recipient or spender address
pub fn validate_address(address: &Address) -> PropertyResult<()> {
    if address.is_zero() {
        return Err(PropertyError::InvalidRecipient);
    }
    Ok(())
}
