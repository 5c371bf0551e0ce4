//! # Brokers Testing Framework
//!
//! Deterministic test harness for the Blockchain Brokers ledger.
//!
//! ## Architecture Overview
//!
//! Two tiers on top of the unit tests living in `brokers_common`:
//! - **Component tests**: full mint/approve/list/inspector scenarios
//!   against a deployed [`harness::TestLedger`]
//! - **Property-based tests**: proptest invariants (sequential ids,
//!   metadata fidelity, custody and balance conservation)
//!
//! ## Quick Start
//!
//! ```rust
//! use brokers_testing_framework::prelude::*;
//!
//! let mut env = TestLedgerBuilder::new().build().unwrap();
//! let seller = env.signers.seller;
//! let receipt = env.mint(seller, "https://example.com/1.png").unwrap();
//! assert_eq!(receipt.output.token_id(), Some(1));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: fixed signer addresses, no wall clock
//! 2. **No mocks**: the harness drives the real in-memory ledger
//! 3. **Fast feedback**: everything runs in-process

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Deployment harness - signers, builder and a deployed ledger environment
pub mod harness;

/// Shared utilities (amount helpers, logging, address generation)
pub mod utilities;

// Convenient re-exports for common usage
pub mod prelude;



pub use harness::{Signers, TestLedger, TestLedgerBuilder};
