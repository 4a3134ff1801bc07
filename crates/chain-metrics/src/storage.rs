//! Storage layout helpers.
//!
//! The chain tally contract keeps its per-miner tally in a Solidity
//! `mapping(address => uint256)`. The compiler places the entry for `key` at
//! `keccak256(leftpad32(key) ++ base_slot)`, so the slot has to be derived
//! bit-exactly to find real data.

use crate::constants::TALLY_INPUT_LEN;
use revm::primitives::{keccak256, Address, B256, U256};

/// Derives the storage slot of `key` in a `mapping(address => _)` declared at `base_slot`.
///
/// Key format: [zero(12)][address(20)][base_slot(32)], hashed with keccak256.
pub fn mapping_slot(key: &Address, base_slot: &B256) -> B256 {
    let mut buf = [0u8; 64];
    buf[12..32].copy_from_slice(key.as_slice());
    buf[32..64].copy_from_slice(base_slot.as_slice());
    keccak256(buf)
}

/// Interprets a storage word as a big-endian unsigned integer.
#[inline]
pub fn decode_word(word: &B256) -> U256 {
    U256::from_be_bytes(word.0)
}

/// Encodes an integer as a 32-byte big-endian word, left-padded with zeros.
#[inline]
pub fn encode_word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}

/// Extracts the address argument of `lastEpochBlockTally(address)`.
///
/// The address is the low 20 bytes of the first argument word, input bytes
/// `[16, 36)`. The 12 high bytes are not checked. Returns `None` if the
/// input is shorter than selector plus one word.
pub fn decode_address_param(input: &[u8]) -> Option<Address> {
    let word = input.get(TALLY_INPUT_LEN - 32..TALLY_INPUT_LEN)?;
    Some(Address::from_slice(&word[12..]))
}
