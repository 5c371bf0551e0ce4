// Property Registry - Storage
//
// The storage trait keeps the operation logic runtime-agnostic; the
// in-memory backend is the canonical implementation used by the ledger.

use std::collections::HashMap;

use crate::crypto::Address;

use super::error::{PropertyError, PropertyResult};
use super::types::{PropertyCollection, PropertyToken};

/// Abstract storage interface for property registry operations
pub trait PropertyStorage {
    // Collection operations
    fn get_collection(&self) -> PropertyCollection;
    fn set_collection(&mut self, collection: &PropertyCollection) -> PropertyResult<()>;

    // Token operations
    fn get_token(&self, token_id: u64) -> Option<PropertyToken>;
    fn set_token(&mut self, token: &PropertyToken) -> PropertyResult<()>;
    fn token_exists(&self, token_id: u64) -> bool;

    // Balance operations
    fn get_balance(&self, owner: &Address) -> u64;
    fn increment_balance(&mut self, owner: &Address) -> PropertyResult<u64>;
    fn decrement_balance(&mut self, owner: &Address) -> PropertyResult<u64>;
}

/// In-memory storage backend for the property registry
#[derive(Clone, Debug)]
pub struct MemoryPropertyStorage {
    collection: PropertyCollection,
    tokens: HashMap<u64, PropertyToken>,
    balances: HashMap<Address, u64>,
}

impl MemoryPropertyStorage {
    /// Create a new in-memory registry holding the given collection
    pub fn new(collection: PropertyCollection) -> Self {
        Self {
            collection,
            tokens: HashMap::new(),
            balances: HashMap::new(),
        }
    }
}

impl PropertyStorage for MemoryPropertyStorage {
    fn get_collection(&self) -> PropertyCollection {
        self.collection.clone()
    }

    fn set_collection(&mut self, collection: &PropertyCollection) -> PropertyResult<()> {
        self.collection = collection.clone();
        Ok(())
    }

    fn get_token(&self, token_id: u64) -> Option<PropertyToken> {
        self.tokens.get(&token_id).cloned()
    }

    fn set_token(&mut self, token: &PropertyToken) -> PropertyResult<()> {
        self.tokens.insert(token.token_id, token.clone());
        Ok(())
    }

    fn token_exists(&self, token_id: u64) -> bool {
        self.tokens.contains_key(&token_id)
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        *self.balances.get(owner).unwrap_or(&0)
    }

    fn increment_balance(&mut self, owner: &Address) -> PropertyResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_add(1).ok_or(PropertyError::Overflow)?;
        Ok(*balance)
    }

    fn decrement_balance(&mut self, owner: &Address) -> PropertyResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(PropertyError::Overflow)?;
        Ok(*balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_storage() -> MemoryPropertyStorage {
        MemoryPropertyStorage::new(PropertyCollection::new(
            "Properties".to_string(),
            "DREAM".to_string(),
            1,
        ))
    }

    #[test]
    fn test_token_storage_roundtrip() {
        let mut storage = new_storage();
        let token = PropertyToken {
            token_id: 1,
            owner: Address::new([1u8; 32]),
            metadata_uri: "uri".to_string(),
            approved: None,
            created_at: 1,
        };

        assert!(!storage.token_exists(1));
        storage.set_token(&token).unwrap();
        assert!(storage.token_exists(1));
        assert_eq!(storage.get_token(1), Some(token));
        assert_eq!(storage.get_token(2), None);
    }

    #[test]
    fn test_balance_tracking() {
        let mut storage = new_storage();
        let owner = Address::new([1u8; 32]);

        assert_eq!(storage.get_balance(&owner), 0);
        assert_eq!(storage.increment_balance(&owner), Ok(1));
        assert_eq!(storage.increment_balance(&owner), Ok(2));
        assert_eq!(storage.decrement_balance(&owner), Ok(1));
        assert_eq!(storage.get_balance(&owner), 1);
    }

    #[test]
    fn test_balance_underflow() {
        let mut storage = new_storage();
        let owner = Address::new([1u8; 32]);
        assert_eq!(
            storage.decrement_balance(&owner),
            Err(PropertyError::Overflow)
        );
    }
}
