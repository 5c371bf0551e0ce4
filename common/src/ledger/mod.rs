// Ledger
// Atomic transaction boundary over the property registry and marketplace.
//
// Every `execute` call either fully commits (returning a receipt with the
// emitted events) or returns a typed error with no state change. Heights
// increase by one per committed transaction; read calls answer from current
// state without touching the height.

mod receipt;
mod transaction;

pub use receipt::*;
pub use transaction::*;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::Address;
use crate::market::operations::{self as market_ops, ListParams};
use crate::market::{Listing, MarketError, MarketState, MemoryMarketStorage};
use crate::property::operations::{self as property_ops, RuntimeContext};
use crate::property::{MemoryPropertyStorage, PropertyCollection, PropertyError};

/// Ledger error type, wrapping both component error enums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Property registry error
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Marketplace error
    #[error(transparent)]
    Market(MarketError),
}

// Registry errors surfaced through the marketplace flatten back to their
// property variant, so callers match one shape regardless of the path.
impl From<MarketError> for LedgerError {
    fn from(error: MarketError) -> Self {
        match error {
            MarketError::Property(inner) => Self::Property(inner),
            other => Self::Market(other),
        }
    }
}

impl LedgerError {
    /// Get the numeric error code
    pub fn code(&self) -> u64 {
        match self {
            Self::Property(e) => e.code(),
            Self::Market(e) => e.code(),
        }
    }
}

/// Deployment parameters for a fresh ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployParams {
    /// Address assigned to the property registry instance
    pub nft_address: Address,

    /// Address assigned to the marketplace instance
    pub market_address: Address,

    /// Marketplace owner (the only caller allowed to register inspectors)
    pub market_owner: Address,

    /// Collection name
    pub collection_name: String,

    /// Collection symbol
    pub collection_symbol: String,
}

/// In-memory ledger holding one property registry and one marketplace
pub struct Ledger {
    registry: MemoryPropertyStorage,
    market: MemoryMarketStorage,
    height: u64,
}

impl Ledger {
    /// Deploy a registry and a marketplace bound to it at height 0
    pub fn new(params: DeployParams) -> Result<Self, LedgerError> {
        let collection =
            PropertyCollection::new(params.collection_name, params.collection_symbol, 0);
        collection.validate()?;

        let state = MarketState::new(params.market_address, params.nft_address, params.market_owner);

        Ok(Self {
            registry: MemoryPropertyStorage::new(collection),
            market: MemoryMarketStorage::new(state),
            height: 0,
        })
    }

    /// Current chain height (number of committed transactions)
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Execute one transaction atomically on behalf of `caller`.
    ///
    /// On success the ledger height advances by one and the receipt carries
    /// the emitted events. On failure no state changes.
    pub fn execute(
        &mut self,
        caller: Address,
        transaction: Transaction,
    ) -> Result<Receipt, LedgerError> {
        let height = self
            .height
            .checked_add(1)
            .ok_or(PropertyError::Overflow)?;
        let ctx = RuntimeContext::new(caller, height);

        let result = self.apply(&ctx, &transaction);
        match result {
            Ok((output, events)) => {
                self.height = height;
                debug!(
                    "committed {} from {} at height {} ({} events)",
                    transaction.kind(),
                    caller,
                    height,
                    events.len()
                );
                Ok(Receipt {
                    height,
                    output,
                    events,
                })
            }
            Err(error) => {
                warn!(
                    "rejected {} from {}: {} (code {})",
                    transaction.kind(),
                    caller,
                    error,
                    error.code()
                );
                Err(error)
            }
        }
    }

    fn apply(
        &mut self,
        ctx: &RuntimeContext,
        transaction: &Transaction,
    ) -> Result<(TransactionOutput, Vec<Event>), LedgerError> {
        match transaction {
            Transaction::Mint { metadata_uri } => {
                let token_id = property_ops::mint(&mut self.registry, ctx, metadata_uri.clone())?;
                let events = vec![Event::Transfer {
                    from: Address::zero(),
                    to: ctx.caller,
                    token_id,
                }];
                Ok((TransactionOutput::TokenId(token_id), events))
            }
            Transaction::Approve { spender, token_id } => {
                property_ops::approve(&mut self.registry, ctx, spender, *token_id)?;
                let events = vec![Event::Approval {
                    owner: ctx.caller,
                    spender: *spender,
                    token_id: *token_id,
                }];
                Ok((TransactionOutput::Unit, events))
            }
            Transaction::Transfer { from, to, token_id } => {
                property_ops::transfer_from(&mut self.registry, ctx, from, to, *token_id)?;
                let events = vec![Event::Transfer {
                    from: *from,
                    to: *to,
                    token_id: *token_id,
                }];
                Ok((TransactionOutput::Unit, events))
            }
            Transaction::List { token_id, price } => {
                let offered = market_ops::list(
                    &mut self.market,
                    &mut self.registry,
                    ctx,
                    ListParams {
                        token_id: *token_id,
                        price: *price,
                    },
                )?;
                let events = vec![
                    Event::Transfer {
                        from: offered.seller,
                        to: self.market_address(),
                        token_id: offered.token_id,
                    },
                    Event::Offered(offered.clone()),
                ];
                Ok((TransactionOutput::ListingId(offered.listing_id), events))
            }
            Transaction::AddInspector { inspector } => {
                let added = market_ops::add_inspector(&mut self.market, ctx, inspector)?;
                Ok((TransactionOutput::Unit, vec![Event::InspectorAdded(added)]))
            }
        }
    }

    // ========================================
    // Registry read calls
    // ========================================

    /// Collection name
    pub fn name(&self) -> String {
        property_ops::name(&self.registry)
    }

    /// Collection symbol
    pub fn symbol(&self) -> String {
        property_ops::symbol(&self.registry)
    }

    /// Current total supply of the collection
    pub fn total_supply(&self) -> u64 {
        property_ops::total_supply(&self.registry)
    }

    /// Owner of a token
    pub fn owner_of(&self, token_id: u64) -> Result<Address, LedgerError> {
        Ok(property_ops::owner_of(&self.registry, token_id)?)
    }

    /// Metadata URI of a token
    pub fn token_uri(&self, token_id: u64) -> Result<String, LedgerError> {
        Ok(property_ops::token_uri(&self.registry, token_id)?)
    }

    /// Approved spender of a token, if any
    pub fn get_approved(&self, token_id: u64) -> Result<Option<Address>, LedgerError> {
        Ok(property_ops::get_approved(&self.registry, token_id)?)
    }

    /// Number of tokens owned by an address
    pub fn balance_of(&self, owner: &Address) -> u64 {
        property_ops::balance_of(&self.registry, owner)
    }

    // ========================================
    // Marketplace read calls
    // ========================================

    /// Address of the bound property registry
    pub fn nft_address(&self) -> Address {
        market_ops::nft_address(&self.market)
    }

    /// Address of the marketplace instance
    pub fn market_address(&self) -> Address {
        market_ops::market_address(&self.market)
    }

    /// Marketplace owner
    pub fn market_owner(&self) -> Address {
        market_ops::owner(&self.market)
    }

    /// Registered land inspector at a registry index
    pub fn registered_land_inspectors(&self, index: u64) -> Result<Address, LedgerError> {
        Ok(market_ops::registered_land_inspectors(&self.market, index)?)
    }

    /// Number of registered inspectors
    pub fn inspector_count(&self) -> u64 {
        market_ops::inspector_count(&self.market)
    }

    /// Listing by id
    pub fn listing(&self, id: u64) -> Result<Listing, LedgerError> {
        Ok(market_ops::listing(&self.market, id)?)
    }

    /// Number of listings ever created
    pub fn listing_count(&self) -> u64 {
        market_ops::listing_count(&self.market)
    }
}
