//! Chain metrics precompile entry points.
//!
//! Reads the chain tally contract's raw storage instead of executing it.
//!
//! | Method | Storage read | Output |
//! |--------|--------------|--------|
//! | currentEpoch() | slot 0 | epoch |
//! | lastEpochBlockTally(address) | slot 3, then `mapping_slot(miner, base)` | tally |
//!
//! Output is either empty or exactly one 32-byte big-endian word. Short
//! input, unknown selectors and a missing argument yield empty output and no
//! error; callers should read that as "no data", not as a failure.

use crate::{
    constants::{slots, CHAIN_TALLY_ADDRESS, ZERO_WORD},
    error::ChainMetricsError,
    selector::MetricsCall,
    state::StateReader,
    storage::{decode_address_param, decode_word, encode_word, mapping_slot},
};
use revm::primitives::{Address, Bytes, U256};
use tracing::{debug, trace};

/// Entry point for hosts that cannot provide state. Always fails.
pub fn run_stateless(_input: &[u8]) -> Result<Bytes, ChainMetricsError> {
    debug!(target: "chain_metrics", "invoked without state access");
    Err(ChainMetricsError::RequiresState)
}

/// Runs the precompile against `state` and encodes the result.
///
/// Empty bytes for a soft no-op, otherwise one 32-byte word.
pub fn run_stateful<S: StateReader>(
    state: Option<S>,
    input: &[u8],
) -> Result<Bytes, ChainMetricsError> {
    Ok(read_stateful(state, input)?
        .map(|value| Bytes::copy_from_slice(encode_word(value).as_slice()))
        .unwrap_or_default())
}

/// Runs the precompile against `state`, reading from the chain tally contract.
///
/// Returns `Ok(None)` for calls that are answered with empty output.
pub fn read_stateful<S: StateReader>(
    state: Option<S>,
    input: &[u8],
) -> Result<Option<U256>, ChainMetricsError> {
    read_stateful_at(state, CHAIN_TALLY_ADDRESS, input)
}

/// Like [`read_stateful`] with an explicit metrics contract address.
pub fn read_stateful_at<S: StateReader>(
    state: Option<S>,
    contract: Address,
    input: &[u8],
) -> Result<Option<U256>, ChainMetricsError> {
    let Some(mut state) = state else {
        debug!(target: "chain_metrics", "stateful read without state access");
        return Err(ChainMetricsError::RequiresState);
    };

    let call = MetricsCall::classify(input);
    trace!(
        target: "chain_metrics",
        ?call,
        supported = call.is_supported(),
        input_len = input.len(),
        "dispatching"
    );

    match call {
        MetricsCall::TooShort | MetricsCall::Unrecognized => Ok(None),
        MetricsCall::CurrentEpoch => current_epoch(&mut state, contract).map(Some),
        MetricsCall::LastEpochBlockTally => {
            let Some(miner) = decode_address_param(input) else {
                trace!(target: "chain_metrics", input_len = input.len(), "missing miner argument");
                return Ok(None);
            };
            last_epoch_block_tally(&mut state, contract, &miner).map(Some)
        }
    }
}

/// currentEpoch() => uint256
fn current_epoch<S: StateReader>(
    state: &mut S,
    contract: Address,
) -> Result<U256, ChainMetricsError> {
    let word = state.storage(contract, slots::CURRENT_EPOCH)?;
    Ok(decode_word(&word))
}

/// lastEpochBlockTally(address) => uint256
fn last_epoch_block_tally<S: StateReader>(
    state: &mut S,
    contract: Address,
    miner: &Address,
) -> Result<U256, ChainMetricsError> {
    let base_slot = state.storage(contract, slots::LAST_TALLY_BASE)?;
    if base_slot == ZERO_WORD {
        trace!(target: "chain_metrics", "tally mapping not initialized");
        return Ok(U256::ZERO);
    }

    let word = state.storage(contract, mapping_slot(miner, &base_slot))?;
    Ok(decode_word(&word))
}
