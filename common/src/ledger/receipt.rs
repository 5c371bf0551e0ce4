// Ledger - Receipts and Events

use serde::{Deserialize, Serialize};

use crate::crypto::Address;
use crate::market::{InspectorAdded, Offered};

/// Notification emitted while applying a transaction.
///
/// Events are exposed to observers through the receipt; they are not part
/// of the ledger state itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Event {
    /// Token ownership changed; mints use the zero address as `from`
    Transfer {
        /// Previous owner (zero for mints)
        from: Address,
        /// New owner
        to: Address,
        /// Token ID
        token_id: u64,
    },

    /// A spender was approved for a token
    Approval {
        /// Token owner
        owner: Address,
        /// Approved spender
        spender: Address,
        /// Token ID
        token_id: u64,
    },

    /// A token was listed for sale
    Offered(Offered),

    /// A land inspector was registered
    InspectorAdded(InspectorAdded),
}

/// Return value of a committed transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionOutput {
    /// No return value
    Unit,
    /// The minted token id
    TokenId(u64),
    /// The created listing id
    ListingId(u64),
}

impl TransactionOutput {
    /// The minted token id, if this output carries one
    pub fn token_id(&self) -> Option<u64> {
        match self {
            Self::TokenId(id) => Some(*id),
            _ => None,
        }
    }

    /// The created listing id, if this output carries one
    pub fn listing_id(&self) -> Option<u64> {
        match self {
            Self::ListingId(id) => Some(*id),
            _ => None,
        }
    }
}

/// Proof that a transaction was included and committed.
///
/// A receipt only exists for committed transactions; a rejected transaction
/// returns its error instead and leaves no trace in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Height at which the transaction committed
    pub height: u64,

    /// Return value of the operation
    pub output: TransactionOutput,

    /// Events emitted during execution, in emission order
    pub events: Vec<Event>,
}

impl Receipt {
    /// First `Offered` event in the receipt, if any
    pub fn offered(&self) -> Option<&Offered> {
        self.events.iter().find_map(|event| match event {
            Event::Offered(offered) => Some(offered),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let receipt = Receipt {
            height: 3,
            output: TransactionOutput::ListingId(1),
            events: vec![
                Event::Transfer {
                    from: Address::new([2u8; 32]),
                    to: Address::new([11u8; 32]),
                    token_id: 1,
                },
                Event::Offered(Offered {
                    listing_id: 1,
                    token_contract: Address::new([10u8; 32]),
                    token_id: 1,
                    price: 500_000_000,
                    seller: Address::new([2u8; 32]),
                }),
            ],
        };
        let data = serde_json::to_vec(&receipt)?;
        let decoded: Receipt = serde_json::from_slice(&data)?;
        assert_eq!(receipt, decoded);
        Ok(())
    }

    #[test]
    fn test_offered_accessor() {
        let receipt = Receipt {
            height: 1,
            output: TransactionOutput::Unit,
            events: vec![],
        };
        assert_eq!(receipt.offered(), None);
        assert_eq!(receipt.output.token_id(), None);
        assert_eq!(TransactionOutput::TokenId(7).token_id(), Some(7));
        assert_eq!(TransactionOutput::ListingId(7).listing_id(), Some(7));
    }
}
