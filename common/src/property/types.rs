// Property Registry - Core Types

use serde::{Deserialize, Serialize};

use crate::crypto::Address;

use super::error::PropertyError;

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Maximum metadata URI length (bytes)
pub const MAX_METADATA_URI_LENGTH: usize = 512;

// ========================================
// Property Collection
// ========================================

/// Collection record for the property registry.
/// One registry instance holds exactly one collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCollection {
    /// Collection name (max 64 bytes)
    pub name: String,

    /// Symbol (max 8 bytes, uppercase ASCII)
    pub symbol: String,

    /// Current total supply
    pub total_supply: u64,

    /// Next token ID (starts from 1, ids are never reused)
    pub next_token_id: u64,

    /// Creation block height
    pub created_at: u64,
}

impl PropertyCollection {
    /// Create a new collection with an empty supply
    pub fn new(name: String, symbol: String, created_at: u64) -> Self {
        Self {
            name,
            symbol,
            total_supply: 0,
            next_token_id: 1,
            created_at,
        }
    }

    /// Validate the collection configuration
    pub fn validate(&self) -> Result<(), PropertyError> {
        if self.name.is_empty() {
            return Err(PropertyError::NameEmpty);
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(PropertyError::NameTooLong);
        }

        if self.symbol.is_empty() {
            return Err(PropertyError::SymbolEmpty);
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(PropertyError::SymbolTooLong);
        }
        if !self
            .symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(PropertyError::SymbolInvalidChar);
        }

        Ok(())
    }

    /// Get next token ID and increment
    pub fn allocate_token_id(&mut self) -> Result<u64, PropertyError> {
        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or(PropertyError::Overflow)?;
        Ok(token_id)
    }
}

// ========================================
// Property Token
// ========================================

/// A single property token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyToken {
    /// Token ID (starts from 1, 0 is invalid)
    pub token_id: u64,

    /// Owner address
    pub owner: Address,

    /// Metadata URI, immutable after mint
    pub metadata_uri: String,

    /// Single token approval (auto-cleared on transfer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<Address>,

    /// Creation block height
    pub created_at: u64,
}

impl PropertyToken {
    /// Validate the token data
    pub fn validate(&self) -> Result<(), PropertyError> {
        if self.token_id == 0 {
            return Err(PropertyError::InvalidTokenId);
        }

        if self.owner.is_zero() {
            return Err(PropertyError::InvalidRecipient);
        }

        if self.metadata_uri.len() > MAX_METADATA_URI_LENGTH {
            return Err(PropertyError::UriTooLong);
        }

        Ok(())
    }

    /// Check if the address can transfer this token
    pub fn can_operate(&self, operator: &Address) -> bool {
        if self.owner == *operator {
            return true;
        }

        self.approved.as_ref() == Some(operator)
    }

    /// Clear approval (called after transfer)
    pub fn clear_approval(&mut self) {
        self.approved = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_collection() -> PropertyCollection {
        PropertyCollection::new("Properties".to_string(), "DREAM".to_string(), 1)
    }

    #[test]
    fn test_collection_validation() {
        assert!(test_collection().validate().is_ok());

        let mut col = test_collection();
        col.name = String::new();
        assert_eq!(col.validate(), Err(PropertyError::NameEmpty));

        let mut col = test_collection();
        col.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(col.validate(), Err(PropertyError::NameTooLong));

        let mut col = test_collection();
        col.symbol = "dream".to_string();
        assert_eq!(col.validate(), Err(PropertyError::SymbolInvalidChar));

        let mut col = test_collection();
        col.symbol = "TOOLONGSYM".to_string();
        assert_eq!(col.validate(), Err(PropertyError::SymbolTooLong));
    }

    #[test]
    fn test_allocate_token_id() {
        let mut col = test_collection();
        assert_eq!(col.allocate_token_id(), Ok(1));
        assert_eq!(col.allocate_token_id(), Ok(2));
        assert_eq!(col.next_token_id, 3);
    }

    #[test]
    fn test_allocate_token_id_overflow() {
        let mut col = test_collection();
        col.next_token_id = u64::MAX;
        assert_eq!(col.allocate_token_id(), Ok(u64::MAX));
        assert_eq!(col.allocate_token_id(), Err(PropertyError::Overflow));
    }

    #[test]
    fn test_token_validation() {
        let token = PropertyToken {
            token_id: 1,
            owner: Address::new([1u8; 32]),
            metadata_uri: "https://example.com/1.json".to_string(),
            approved: None,
            created_at: 1,
        };
        assert!(token.validate().is_ok());

        let mut bad = token.clone();
        bad.token_id = 0;
        assert_eq!(bad.validate(), Err(PropertyError::InvalidTokenId));

        let mut bad = token.clone();
        bad.owner = Address::zero();
        assert_eq!(bad.validate(), Err(PropertyError::InvalidRecipient));

        let mut bad = token;
        bad.metadata_uri = "x".repeat(MAX_METADATA_URI_LENGTH + 1);
        assert_eq!(bad.validate(), Err(PropertyError::UriTooLong));
    }

    #[test]
    fn test_can_operate() {
        let owner = Address::new([1u8; 32]);
        let spender = Address::new([2u8; 32]);
        let stranger = Address::new([3u8; 32]);

        let mut token = PropertyToken {
            token_id: 1,
            owner,
            metadata_uri: String::new(),
            approved: Some(spender),
            created_at: 1,
        };

        assert!(token.can_operate(&owner));
        assert!(token.can_operate(&spender));
        assert!(!token.can_operate(&stranger));

        token.clear_approval();
        assert!(!token.can_operate(&spender));
    }
}
