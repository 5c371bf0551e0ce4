//! Convenient re-exports for writing scenarios.

pub use crate::harness::{Signers, TestLedger, TestLedgerBuilder};
pub use crate::utilities::{init_logging, random_address, test_address, tokens};

pub use brokers_common::config::{COLLECTION_NAME, COLLECTION_SYMBOL};
pub use brokers_common::crypto::Address;
pub use brokers_common::ledger::{
    DeployParams, Event, Ledger, LedgerError, Receipt, Transaction, TransactionOutput,
};
pub use brokers_common::market::{InspectorAdded, MarketError, Offered};
pub use brokers_common::property::PropertyError;
