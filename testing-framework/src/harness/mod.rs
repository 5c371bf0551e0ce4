//! Deployment harness.
//!
//! [`TestLedgerBuilder`] plays the role of the deployment script: it fixes
//! the signer set, deploys a property registry plus a marketplace bound to
//! it, and optionally seeds the pre-listed state (seller mints a token and
//! approves the marketplace) that most scenarios start from.

use anyhow::{Context, Result};
use brokers_common::config;
use brokers_common::crypto::Address;
use brokers_common::ledger::{DeployParams, Ledger, LedgerError, Receipt, Transaction};

use crate::utilities::{init_logging, test_address};

/// The four signer identities every scenario works with.
///
/// The lender doubles as the marketplace owner under the single-owner
/// deployment convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signers {
    /// Prospective buyer (never a privileged role here)
    pub buyer: Address,
    /// Seller; mints and lists property tokens
    pub seller: Address,
    /// Land inspector candidate
    pub inspector: Address,
    /// Lender; owns the marketplace
    pub lender: Address,
}

impl Signers {
    /// Fixed, recognizable addresses for deterministic tests
    pub fn deterministic() -> Self {
        Self {
            buyer: test_address(1),
            seller: test_address(2),
            inspector: test_address(3),
            lender: test_address(4),
        }
    }
}

/// Builder for a deployed test environment
pub struct TestLedgerBuilder {
    collection_name: String,
    collection_symbol: String,
    signers: Signers,
    seed_uri: Option<String>,
}

impl TestLedgerBuilder {
    /// Start from the canonical deployment (name "Properties", symbol
    /// "DREAM", deterministic signers, no seeded state)
    pub fn new() -> Self {
        Self {
            collection_name: config::COLLECTION_NAME.to_string(),
            collection_symbol: config::COLLECTION_SYMBOL.to_string(),
            signers: Signers::deterministic(),
            seed_uri: None,
        }
    }

    /// Override the collection identity
    pub fn with_collection(mut self, name: &str, symbol: &str) -> Self {
        self.collection_name = name.to_string();
        self.collection_symbol = symbol.to_string();
        self
    }

    /// Override the signer set
    pub fn with_signers(mut self, signers: Signers) -> Self {
        self.signers = signers;
        self
    }

    /// Seed the listed-ready state: the seller mints a token with this URI
    /// and approves the marketplace for it
    pub fn with_seeded_property(mut self, uri: &str) -> Self {
        self.seed_uri = Some(uri.to_string());
        self
    }

    /// Deploy the environment
    pub fn build(self) -> Result<TestLedger> {
        init_logging();

        let signers = self.signers;
        let nft_address = test_address(10);
        let market_address = test_address(11);

        let ledger = Ledger::new(DeployParams {
            nft_address,
            market_address,
            market_owner: signers.lender,
            collection_name: self.collection_name,
            collection_symbol: self.collection_symbol,
        })
        .context("failed to deploy test ledger")?;

        log::debug!(
            "deployed test ledger: registry {} marketplace {} owner {}",
            nft_address,
            market_address,
            signers.lender
        );

        let mut env = TestLedger { ledger, signers };

        if let Some(uri) = self.seed_uri {
            let receipt = env
                .mint(signers.seller, &uri)
                .context("failed to mint seeded property")?;
            let token_id = receipt
                .output
                .token_id()
                .context("mint receipt carried no token id")?;
            env.approve(signers.seller, token_id)
                .context("failed to approve seeded property")?;
        }

        Ok(env)
    }
}

impl Default for TestLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A deployed ledger plus its signer set
pub struct TestLedger {
    /// The ledger under test
    pub ledger: Ledger,
    /// Signer identities
    pub signers: Signers,
}

impl TestLedger {
    /// Address of the deployed property registry
    pub fn nft_address(&self) -> Address {
        self.ledger.nft_address()
    }

    /// Address of the deployed marketplace
    pub fn market_address(&self) -> Address {
        self.ledger.market_address()
    }

    /// Mint a property token as `caller`
    pub fn mint(&mut self, caller: Address, uri: &str) -> Result<Receipt, LedgerError> {
        self.ledger.execute(
            caller,
            Transaction::Mint {
                metadata_uri: uri.to_string(),
            },
        )
    }

    /// Approve the marketplace as spender of `token_id`, as `caller`
    pub fn approve(&mut self, caller: Address, token_id: u64) -> Result<Receipt, LedgerError> {
        let spender = self.market_address();
        self.ledger
            .execute(caller, Transaction::Approve { spender, token_id })
    }

    /// List `token_id` at `price` atomic units, as `caller`
    pub fn list(
        &mut self,
        caller: Address,
        token_id: u64,
        price: u64,
    ) -> Result<Receipt, LedgerError> {
        self.ledger
            .execute(caller, Transaction::List { token_id, price })
    }

    /// Register a land inspector, as `caller`
    pub fn add_inspector(
        &mut self,
        caller: Address,
        inspector: Address,
    ) -> Result<Receipt, LedgerError> {
        self.ledger
            .execute(caller, Transaction::AddInspector { inspector })
    }
}
