// Ledger - Transactions

use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// A mutating operation submitted to the ledger.
///
/// The signer is not part of the transaction; caller identity is an
/// explicit parameter of `Ledger::execute`, never ambient state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transaction {
    /// Mint a new property token to the caller
    Mint {
        /// Immutable metadata URI
        metadata_uri: String,
    },

    /// Approve a single spender for a token the caller owns
    Approve {
        /// Spender address (typically the marketplace)
        spender: Address,
        /// Token ID
        token_id: u64,
    },

    /// Transfer a token; the caller must be the owner or approved spender
    Transfer {
        /// Expected current owner
        from: Address,
        /// New owner
        to: Address,
        /// Token ID
        token_id: u64,
    },

    /// List a token for sale on the marketplace
    List {
        /// Token ID
        token_id: u64,
        /// Asking price in atomic base-currency units
        price: u64,
    },

    /// Register a land inspector (marketplace owner only)
    AddInspector {
        /// Inspector address
        inspector: Address,
    },
}

impl Transaction {
    /// Short operation name, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Approve { .. } => "approve",
            Self::Transfer { .. } => "transfer",
            Self::List { .. } => "list",
            Self::AddInspector { .. } => "add-inspector",
        }
    }
}
