// Marketplace
// Listing/escrow side of the Brokers ledger.
//
// Features:
// - Takes custody of an approved property token when its owner lists it
// - Records listings (price, token contract, token id, seller) under
//   sequential listing ids
// - Owner-gated land-inspector registry
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (MarketState, Listing, events)
// - storage: Storage trait and in-memory backend
// - operations: Core operation logic (list, inspectors, query)

mod error;
pub mod operations;
mod storage;
mod types;

pub use error::*;
pub use storage::*;
pub use types::*;
