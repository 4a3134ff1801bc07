//! Chain metrics precompile for REVM.
//!
//! Lets contracts cheaply query two chain-level metrics kept by the chain
//! tally system contract, by reading its raw storage instead of running its
//! bytecode:
//! - `currentEpoch()`: the epoch counter at slot 0
//! - `lastEpochBlockTally(address)`: the per-miner entry of the
//!   `mapping(address => uint256)` whose base slot is stored at slot 3
//!
//! Malformed calls are silent no-ops (empty output, no error). Only a call
//! made without state access fails, with [`ChainMetricsError::RequiresState`].

/// Configuration of the precompile and metrics contract addresses.
pub mod config;
/// Addresses, storage slots and gas schedule.
pub mod constants;
/// Error type for the chain metrics precompile.
pub mod error;
/// Gas estimation by selector.
pub mod gas;
/// Solidity interface of the precompile.
pub mod interface;
/// Stateless and stateful precompile entry points.
pub mod precompile;
/// REVM precompile provider that hosts the chain metrics precompile.
pub mod provider;
/// Call classification by function selector.
pub mod selector;
/// State read capability consumed by the precompile.
pub mod state;
/// Storage layout helpers: mapping slot derivation and word encoding.
pub mod storage;

pub use config::ChainMetricsConfig;
pub use constants::{CHAIN_METRICS_PRECOMPILE_ADDRESS, CHAIN_TALLY_ADDRESS};
pub use error::ChainMetricsError;
pub use gas::estimate_gas;
pub use precompile::{read_stateful, read_stateful_at, run_stateful, run_stateless};
pub use provider::{chain_metrics_stateless_run, run_chain_metrics, ChainMetricsPrecompiles};
pub use selector::MetricsCall;
pub use state::{InMemoryState, JournalStateReader, StateReader};
pub use storage::mapping_slot;
