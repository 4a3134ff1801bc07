//! Fixed addresses, storage slots and gas costs of the chain metrics precompile.

use revm::primitives::{Address, B256};

/// Address the host routes chain metrics calls to (`0x1000…0004`).
pub const CHAIN_METRICS_PRECOMPILE_ADDRESS: Address = Address::new([
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x04,
]);

/// Chain tally system contract whose storage holds the metrics (`0x1000…0002`).
pub const CHAIN_TALLY_ADDRESS: Address = Address::new([
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02,
]);

/// Storage slots of the chain tally contract.
pub mod slots {
    use revm::primitives::B256;

    /// Current epoch counter.
    pub const CURRENT_EPOCH: B256 = B256::ZERO;

    /// Base slot of the last epoch's `mapping(address => uint256)` block tally.
    ///
    /// The word stored here is itself a slot number; zero means the mapping
    /// has not been initialized yet.
    pub const LAST_TALLY_BASE: B256 = B256::with_last_byte(3);
}

/// Gas costs charged up front, keyed by selector.
pub mod gas {
    /// currentEpoch()
    pub const CURRENT_EPOCH: u64 = 500;
    /// lastEpochBlockTally(address)
    pub const LAST_EPOCH_BLOCK_TALLY: u64 = 2_000;
    /// Short input or unknown selector
    pub const UNSUPPORTED: u64 = 0;
}

/// Length of a function selector.
pub const SELECTOR_LEN: usize = 4;

/// Minimum input length of `lastEpochBlockTally(address)`: selector plus one word.
pub const TALLY_INPUT_LEN: usize = SELECTOR_LEN + 32;

/// The all-zero storage word.
pub const ZERO_WORD: B256 = B256::ZERO;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precompile_address() {
        let expected = Address::new([
            0x10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x04,
        ]);
        assert_eq!(CHAIN_METRICS_PRECOMPILE_ADDRESS, expected);
        assert_ne!(CHAIN_METRICS_PRECOMPILE_ADDRESS, CHAIN_TALLY_ADDRESS);
    }

    #[test]
    fn test_slot_indices() {
        assert_eq!(slots::CURRENT_EPOCH, B256::ZERO);
        let base = slots::LAST_TALLY_BASE;
        assert_eq!(base[..31], [0u8; 31]);
        assert_eq!(base[31], 3);
    }
}
