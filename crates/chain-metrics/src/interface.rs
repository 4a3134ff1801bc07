//! Chain metrics precompile Solidity interface.
//!
//! Uses alloy-sol-types' `sol!` macro so the selectors are computed from the
//! canonical signatures at compile time.

use alloy_sol_types::SolCall;

alloy_sol_types::sol! {
    /// Chain metrics precompile interface.
    interface IChainMetrics {
        function currentEpoch() external view returns (uint256 epoch);
        function lastEpochBlockTally(address miner) external view returns (uint256 tally);
    }
}

/// Selector of `currentEpoch()`.
pub const SELECTOR_CURRENT_EPOCH: [u8; 4] = IChainMetrics::currentEpochCall::SELECTOR;

/// Selector of `lastEpochBlockTally(address)`.
pub const SELECTOR_LAST_EPOCH_BLOCK_TALLY: [u8; 4] =
    IChainMetrics::lastEpochBlockTallyCall::SELECTOR;

#[cfg(test)]
mod tests {
    use super::*;
    use revm::primitives::{keccak256, Address, U256};

    #[test]
    fn test_selectors_match_signature_hashes() {
        assert_eq!(
            SELECTOR_CURRENT_EPOCH,
            keccak256("currentEpoch()")[..4]
        );
        assert_eq!(
            SELECTOR_LAST_EPOCH_BLOCK_TALLY,
            keccak256("lastEpochBlockTally(address)")[..4]
        );
        assert_eq!(SELECTOR_CURRENT_EPOCH, [0x76, 0x67, 0x18, 0x08]);
        assert_eq!(SELECTOR_LAST_EPOCH_BLOCK_TALLY, [0x79, 0xab, 0x9b, 0x15]);
    }

    #[test]
    fn test_encoded_call_layout() {
        let miner = Address::new([0x11; 20]);
        let input = IChainMetrics::lastEpochBlockTallyCall { miner }.abi_encode();
        assert_eq!(input.len(), 36);
        assert_eq!(input[..4], SELECTOR_LAST_EPOCH_BLOCK_TALLY);
        assert_eq!(input[4..16], [0u8; 12]);
        assert_eq!(&input[16..36], miner.as_slice());
    }

    #[test]
    fn test_return_is_single_word() {
        let encoded =
            IChainMetrics::currentEpochCall::abi_encode_returns(&U256::from(7));
        assert_eq!(encoded.len(), 32);
        assert_eq!(encoded[31], 7);
    }
}
