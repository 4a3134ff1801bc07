//! Configuration of the chain metrics precompile.

use crate::constants::{CHAIN_METRICS_PRECOMPILE_ADDRESS, CHAIN_TALLY_ADDRESS};
use revm::primitives::Address;

/// Where the precompile is installed and which contract it reads.
///
/// Defaults to the well-known chain addresses. A config is fixed once the
/// provider holding it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChainMetricsConfig {
    /// Address calls are routed to.
    pub precompile_address: Address,
    /// Chain tally contract whose storage holds the metrics.
    pub metrics_contract: Address,
}

impl ChainMetricsConfig {
    /// Create a config with explicit addresses.
    pub const fn new(precompile_address: Address, metrics_contract: Address) -> Self {
        Self {
            precompile_address,
            metrics_contract,
        }
    }
}

impl Default for ChainMetricsConfig {
    fn default() -> Self {
        Self::new(CHAIN_METRICS_PRECOMPILE_ADDRESS, CHAIN_TALLY_ADDRESS)
    }
}
