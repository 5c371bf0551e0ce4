// Protocol constants for the Brokers ledger.

// Canonical deployment identity of the property collection.
// The registry itself accepts any valid name/symbol; these are the values
// used by the reference deployment and the test harness.
pub const COLLECTION_NAME: &str = "Properties";
pub const COLLECTION_SYMBOL: &str = "DREAM";

// 8 decimals numbers
pub const COIN_DECIMALS: u8 = 8;
// 100 000 000 atomic units to represent 1 coin
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

/// Convert a whole-coin amount into atomic units.
/// Listing prices are denominated in atomic units everywhere else.
#[inline]
pub const fn coins(n: u64) -> u64 {
    n * COIN_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_value() {
        assert_eq!(COIN_VALUE, 100_000_000);
        assert_eq!(coins(5), 5 * COIN_VALUE);
        assert_eq!(coins(0), 0);
    }
}
