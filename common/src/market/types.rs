// Marketplace - Core Types

use serde::{Deserialize, Serialize};

use crate::crypto::Address;

use super::error::MarketError;

// ========================================
// Market State
// ========================================

/// Mutable marketplace contract state.
///
/// The single-owner convention: the owner is fixed at construction and
/// inspectors are registered afterwards through the owner-gated
/// `add_inspector` operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    /// Address of this marketplace instance (custody holder for listed tokens)
    pub market_address: Address,

    /// Address of the bound property registry
    pub nft_address: Address,

    /// Contract owner, the only caller allowed to register inspectors
    pub owner: Address,

    /// Next listing ID (starts from 1)
    pub next_listing_id: u64,

    /// Next inspector registry index (starts from 1)
    pub next_inspector_index: u64,
}

impl MarketState {
    /// Create the state for a freshly deployed marketplace
    pub fn new(market_address: Address, nft_address: Address, owner: Address) -> Self {
        Self {
            market_address,
            nft_address,
            owner,
            next_listing_id: 1,
            next_inspector_index: 1,
        }
    }

    /// Get next listing ID and increment
    pub fn allocate_listing_id(&mut self) -> Result<u64, MarketError> {
        let id = self.next_listing_id;
        self.next_listing_id = self
            .next_listing_id
            .checked_add(1)
            .ok_or(MarketError::Overflow)?;
        Ok(id)
    }

    /// Get next inspector index and increment
    pub fn allocate_inspector_index(&mut self) -> Result<u64, MarketError> {
        let index = self.next_inspector_index;
        self.next_inspector_index = self
            .next_inspector_index
            .checked_add(1)
            .ok_or(MarketError::Overflow)?;
        Ok(index)
    }
}

// ========================================
// Listing
// ========================================

/// An active sale offer recorded by the marketplace.
///
/// Listings are one-way within this scope: created by `list`, never
/// updated or cancelled (a purchase flow would close them).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Listing ID (starts from 1)
    pub id: u64,

    /// Token registry contract holding the token
    pub token_contract: Address,

    /// Token ID being sold
    pub token_id: u64,

    /// Asking price in atomic base-currency units
    pub price: u64,

    /// Address that listed the token; owned it at listing time
    pub seller: Address,

    /// Block height at which the listing was created
    pub created_at: u64,
}

// ========================================
// Event Payloads
// ========================================

/// Notification emitted when a token is listed for sale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offered {
    /// Listing ID
    pub listing_id: u64,

    /// Token registry contract
    pub token_contract: Address,

    /// Token ID
    pub token_id: u64,

    /// Asking price in atomic units
    pub price: u64,

    /// Seller address
    pub seller: Address,
}

/// Notification emitted when the owner registers a land inspector
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectorAdded {
    /// Registry index the inspector was stored under
    pub index: u64,

    /// Inspector address
    pub inspector: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_allocation() {
        let mut state = MarketState::new(
            Address::new([11u8; 32]),
            Address::new([10u8; 32]),
            Address::new([4u8; 32]),
        );

        assert_eq!(state.allocate_listing_id(), Ok(1));
        assert_eq!(state.allocate_listing_id(), Ok(2));
        assert_eq!(state.allocate_inspector_index(), Ok(1));
        assert_eq!(state.next_listing_id, 3);
        assert_eq!(state.next_inspector_index, 2);
    }

    #[test]
    fn test_state_allocation_overflow() {
        let mut state = MarketState::new(
            Address::new([11u8; 32]),
            Address::new([10u8; 32]),
            Address::new([4u8; 32]),
        );
        state.next_listing_id = u64::MAX;
        assert_eq!(state.allocate_listing_id(), Ok(u64::MAX));
        assert_eq!(state.allocate_listing_id(), Err(MarketError::Overflow));
    }

    #[test]
    fn test_listing_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let listing = Listing {
            id: 1,
            token_contract: Address::new([10u8; 32]),
            token_id: 1,
            price: 500_000_000,
            seller: Address::new([2u8; 32]),
            created_at: 3,
        };
        let data = serde_json::to_vec(&listing)?;
        let decoded: Listing = serde_json::from_slice(&data)?;
        assert_eq!(listing, decoded);
        Ok(())
    }

    #[test]
    fn test_offered_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let offered = Offered {
            listing_id: 1,
            token_contract: Address::new([10u8; 32]),
            token_id: 1,
            price: 500_000_000,
            seller: Address::new([2u8; 32]),
        };
        let data = serde_json::to_vec(&offered)?;
        let decoded: Offered = serde_json::from_slice(&data)?;
        assert_eq!(offered, decoded);
        Ok(())
    }
}
