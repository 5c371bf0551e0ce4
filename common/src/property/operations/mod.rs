// Property Registry Operations
// Core business logic for the property registry.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via the PropertyStorage trait
// - Runtime facts (caller, block height) are passed as parameters
// - Every operation validates all preconditions before the first write,
//   so a returned error implies no state change

mod approve;
mod mint;
mod query;
mod transfer;
mod validation;

pub use approve::*;
pub use mint::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use crate::crypto::Address;
use crate::property::{PropertyError, PropertyResult, PropertyToken};

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing caller and block information
#[derive(Clone, Debug)]
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
    /// Current block height
    pub block_height: u64,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check if the caller has permission to transfer a token.
/// Returns Ok(()) if the caller is the owner or the approved spender.
pub fn check_transfer_permission(token: &PropertyToken, caller: &Address) -> PropertyResult<()> {
    if token.owner == *caller {
        return Ok(());
    }

    if token.approved.as_ref() == Some(caller) {
        return Ok(());
    }

    Err(PropertyError::NotApproved)
}
