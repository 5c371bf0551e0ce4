// Property Registry
// Chain-native token collection backing real-estate listings.
//
// Features:
// - Sequential token ids starting at 1, never reused
// - Immutable per-token metadata URI set at mint time
// - Single-spender approval per token, cleared on transfer
// - Per-owner balance tracking
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (PropertyCollection, PropertyToken)
// - storage: Storage trait and in-memory backend
// - operations: Core operation logic (mint, approve, transfer, query)

mod error;
pub mod operations;
mod storage;
mod types;

pub use error::*;
pub use storage::*;
pub use types::*;
