//! Shared utilities across the test tiers.

use std::sync::Once;

use brokers_common::config::coins;
use brokers_common::crypto::Address;
use rand::Rng;

static INIT_LOGGING: Once = Once::new();

/// Initialize env_logger once for the whole test run.
/// Controlled through `RUST_LOG` as usual.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Convert a whole-coin amount into atomic units.
/// Mirrors the `tokens(n)` helper the contract tests are written with.
#[inline]
pub const fn tokens(n: u64) -> u64 {
    coins(n)
}

/// Deterministic address with a recognizable tag byte
pub fn test_address(tag: u8) -> Address {
    Address::new([tag; 32])
}

/// Random non-zero address
pub fn random_address<R: Rng>(rng: &mut R) -> Address {
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    // The zero address is reserved for mint provenance
    if bytes == [0u8; 32] {
        bytes[0] = 1;
    }
    Address::new(bytes)
}
