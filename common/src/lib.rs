// Brokers common library.
//
// Core state and operation logic for the property registry (an NFT-style
// token collection backing real-estate listings) and the marketplace that
// takes custody of listed tokens. The `ledger` module ties both together
// behind an atomic transaction/receipt boundary.

pub mod config;
pub mod crypto;
pub mod ledger;
pub mod market;
pub mod property;
