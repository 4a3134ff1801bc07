//! Precompile provider hosting the chain metrics precompile.
//!
//! Calls to the configured precompile address are charged the up-front gas
//! estimate and then served from the journal. Every other address goes to
//! the Ethereum precompile set.

use crate::{
    config::ChainMetricsConfig,
    gas::estimate_gas,
    precompile::{read_stateful_at, run_stateless},
    state::JournalStateReader,
    storage::encode_word,
};
use revm::{
    context_interface::{Cfg, ContextTr, LocalContextTr},
    handler::{EthPrecompiles, PrecompileProvider},
    inspector::JournalExt,
    interpreter::{CallInput, CallInputs, Gas, InstructionResult, InterpreterResult},
    precompile::{PrecompileOutput, PrecompileResult},
    primitives::{Address, Bytes},
};
use std::{boxed::Box, string::String, vec::Vec};
use tracing::debug;

/// Ethereum precompiles plus the chain metrics precompile.
#[derive(Debug, Clone, Default)]
pub struct ChainMetricsPrecompiles {
    /// Ethereum precompiles serving every other address.
    inner: EthPrecompiles,
    /// Addresses of the precompile and the metrics contract.
    config: ChainMetricsConfig,
}

impl ChainMetricsPrecompiles {
    /// Create a provider with the given config.
    #[inline]
    pub fn new(config: ChainMetricsConfig) -> Self {
        Self {
            inner: EthPrecompiles::default(),
            config,
        }
    }

    /// Config getter.
    #[inline]
    pub const fn config(&self) -> &ChainMetricsConfig {
        &self.config
    }

    /// Returns `true` if `address` is the chain metrics precompile.
    #[inline]
    pub fn is_chain_metrics(&self, address: &Address) -> bool {
        *address == self.config.precompile_address
    }
}

impl<CTX: ContextTr<Journal: JournalExt>> PrecompileProvider<CTX> for ChainMetricsPrecompiles {
    type Output = InterpreterResult;

    #[inline]
    fn set_spec(&mut self, spec: <CTX::Cfg as Cfg>::Spec) -> bool {
        <EthPrecompiles as PrecompileProvider<CTX>>::set_spec(&mut self.inner, spec)
    }

    #[inline]
    fn run(
        &mut self,
        context: &mut CTX,
        inputs: &CallInputs,
    ) -> Result<Option<Self::Output>, String> {
        if !self.is_chain_metrics(&inputs.bytecode_address) {
            return self.inner.run(context, inputs);
        }

        let input = call_input_bytes(context, &inputs.input);
        Ok(Some(run_chain_metrics(
            context,
            self.config.metrics_contract,
            &input,
            inputs.gas_limit,
        )))
    }

    #[inline]
    fn warm_addresses(&self) -> Box<impl Iterator<Item = Address>> {
        let eth = <EthPrecompiles as PrecompileProvider<CTX>>::warm_addresses(&self.inner);
        Box::new(eth.chain(core::iter::once(self.config.precompile_address)))
    }

    #[inline]
    fn contains(&self, address: &Address) -> bool {
        self.is_chain_metrics(address)
            || <EthPrecompiles as PrecompileProvider<CTX>>::contains(&self.inner, address)
    }
}

/// Run the chain metrics precompile against the context's journal.
///
/// The gas estimate is charged in full before any storage is read; there is
/// no further metering. Soft no-ops return successfully with empty output.
pub fn run_chain_metrics<CTX: ContextTr<Journal: JournalExt>>(
    context: &mut CTX,
    metrics_contract: Address,
    input: &[u8],
    gas_limit: u64,
) -> InterpreterResult {
    let mut result = InterpreterResult {
        result: InstructionResult::Return,
        gas: Gas::new(gas_limit),
        output: Bytes::new(),
    };

    if !result.gas.record_cost(estimate_gas(input)) {
        result.result = InstructionResult::PrecompileOOG;
        return result;
    }

    let reader = JournalStateReader::new(context);
    match read_stateful_at(Some(reader), metrics_contract, input) {
        Ok(value) => {
            result.output = value
                .map(|value| Bytes::copy_from_slice(encode_word(value).as_slice()))
                .unwrap_or_default();
        }
        Err(err) => {
            debug!(target: "chain_metrics", %err, "chain metrics precompile failed");
            result.result = InstructionResult::PrecompileError;
        }
    }
    result
}

/// Stateless run function with the REVM precompile signature.
///
/// For hosts that register precompiles as plain functions: there is no state
/// to read, so every call fails.
pub fn chain_metrics_stateless_run(input: &[u8], _gas_limit: u64) -> PrecompileResult {
    run_stateless(input)
        .map(|output| PrecompileOutput::new(0, output))
        .map_err(Into::into)
}

/// Copies the call input out of the shared memory buffer or the call itself.
fn call_input_bytes<CTX: ContextTr>(context: &mut CTX, input: &CallInput) -> Vec<u8> {
    match input {
        CallInput::SharedBuffer(range) => context
            .local()
            .shared_memory_buffer_slice(range.clone())
            .map(|slice| slice.to_vec())
            .unwrap_or_default(),
        CallInput::Bytes(bytes) => bytes.0.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{gas, CHAIN_METRICS_PRECOMPILE_ADDRESS},
        interface::{SELECTOR_CURRENT_EPOCH, SELECTOR_LAST_EPOCH_BLOCK_TALLY},
    };
    use revm::{precompile::u64_to_address, Context, MainContext};

    fn contains<CTX: ContextTr<Journal: JournalExt>>(
        _ctx: &CTX,
        provider: &ChainMetricsPrecompiles,
        address: &Address,
    ) -> bool {
        <ChainMetricsPrecompiles as PrecompileProvider<CTX>>::contains(provider, address)
    }

    fn warm<CTX: ContextTr<Journal: JournalExt>>(_ctx: &CTX, provider: &ChainMetricsPrecompiles) -> Vec<Address> {
        <ChainMetricsPrecompiles as PrecompileProvider<CTX>>::warm_addresses(provider).collect()
    }

    #[test]
    fn test_provider_contains_chain_metrics_and_eth_precompiles() {
        let ctx = Context::mainnet();
        let provider = ChainMetricsPrecompiles::default();

        assert!(
            contains(&ctx, &provider, &CHAIN_METRICS_PRECOMPILE_ADDRESS),
            "chain metrics precompile should exist"
        );
        assert!(
            contains(&ctx, &provider, &u64_to_address(0x01)),
            "ecRecover (0x01) should exist"
        );
        assert!(!contains(&ctx, &provider, &Address::new([0x77; 20])));
    }

    #[test]
    fn test_provider_warms_chain_metrics_address() {
        let ctx = Context::mainnet();
        let provider = ChainMetricsPrecompiles::default();
        let warm = warm(&ctx, &provider);
        assert!(warm.contains(&CHAIN_METRICS_PRECOMPILE_ADDRESS));
        assert!(warm.contains(&u64_to_address(0x01)));
    }

    #[test]
    fn test_custom_precompile_address() {
        let ctx = Context::mainnet();
        let address = Address::new([0x42; 20]);
        let provider = ChainMetricsPrecompiles::new(ChainMetricsConfig {
            precompile_address: address,
            ..Default::default()
        });

        assert!(provider.is_chain_metrics(&address));
        assert!(!provider.is_chain_metrics(&CHAIN_METRICS_PRECOMPILE_ADDRESS));
        assert!(contains(&ctx, &provider, &address));
    }

    #[test]
    fn test_out_of_gas_before_read() {
        let mut ctx = Context::mainnet();
        let result = run_chain_metrics(
            &mut ctx,
            provider_contract(),
            &SELECTOR_CURRENT_EPOCH,
            gas::CURRENT_EPOCH - 1,
        );
        assert_eq!(result.result, InstructionResult::PrecompileOOG);
        assert!(result.output.is_empty());

        let result = run_chain_metrics(
            &mut ctx,
            provider_contract(),
            &SELECTOR_LAST_EPOCH_BLOCK_TALLY,
            gas::LAST_EPOCH_BLOCK_TALLY - 1,
        );
        assert_eq!(result.result, InstructionResult::PrecompileOOG);
    }

    #[test]
    fn test_unknown_selector_costs_nothing() {
        let mut ctx = Context::mainnet();
        let result =
            run_chain_metrics(&mut ctx, provider_contract(), &[0xde, 0xad, 0xbe, 0xef], 0);
        assert_eq!(result.result, InstructionResult::Return);
        assert_eq!(result.gas.spent(), 0);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_stateless_run_fails() {
        let err = chain_metrics_stateless_run(&SELECTOR_CURRENT_EPOCH, 100_000).unwrap_err();
        assert!(!err.is_oog());
        assert!(err.to_string().contains("requires state"));
    }

    fn provider_contract() -> Address {
        ChainMetricsPrecompiles::default().config().metrics_contract
    }
}
