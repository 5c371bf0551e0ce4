// Marketplace - Storage

use std::collections::HashMap;

use crate::crypto::Address;

use super::error::MarketResult;
use super::types::{Listing, MarketState};

/// Abstract storage interface for marketplace operations
pub trait MarketStorage {
    // State operations
    fn get_state(&self) -> MarketState;
    fn set_state(&mut self, state: &MarketState) -> MarketResult<()>;

    // Listing operations
    fn get_listing(&self, id: u64) -> Option<Listing>;
    fn set_listing(&mut self, listing: &Listing) -> MarketResult<()>;

    // Inspector registry operations
    fn get_inspector(&self, index: u64) -> Option<Address>;
    fn set_inspector(&mut self, index: u64, inspector: &Address) -> MarketResult<()>;
}

/// In-memory storage backend for the marketplace
#[derive(Clone, Debug)]
pub struct MemoryMarketStorage {
    state: MarketState,
    listings: HashMap<u64, Listing>,
    inspectors: HashMap<u64, Address>,
}

impl MemoryMarketStorage {
    /// Create a new in-memory marketplace with the given initial state
    pub fn new(state: MarketState) -> Self {
        Self {
            state,
            listings: HashMap::new(),
            inspectors: HashMap::new(),
        }
    }
}

impl MarketStorage for MemoryMarketStorage {
    fn get_state(&self) -> MarketState {
        self.state.clone()
    }

    fn set_state(&mut self, state: &MarketState) -> MarketResult<()> {
        self.state = state.clone();
        Ok(())
    }

    fn get_listing(&self, id: u64) -> Option<Listing> {
        self.listings.get(&id).cloned()
    }

    fn set_listing(&mut self, listing: &Listing) -> MarketResult<()> {
        self.listings.insert(listing.id, listing.clone());
        Ok(())
    }

    fn get_inspector(&self, index: u64) -> Option<Address> {
        self.inspectors.get(&index).copied()
    }

    fn set_inspector(&mut self, index: u64, inspector: &Address) -> MarketResult<()> {
        self.inspectors.insert(index, *inspector);
        Ok(())
    }
}
