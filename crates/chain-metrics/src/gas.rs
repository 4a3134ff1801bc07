//! Up-front gas estimation.
//!
//! | Method | Gas |
//! |--------|-----|
//! | currentEpoch | 500 |
//! | lastEpochBlockTally | 2,000 |
//! | anything else | 0 |

use crate::{constants::gas, selector::MetricsCall};

/// Gas the caller must reserve for `input`. Depends on the selector only.
pub fn estimate_gas(input: &[u8]) -> u64 {
    MetricsCall::classify(input).gas_cost()
}

impl MetricsCall {
    /// Fixed gas cost of this call.
    pub const fn gas_cost(&self) -> u64 {
        match self {
            Self::CurrentEpoch => gas::CURRENT_EPOCH,
            Self::LastEpochBlockTally => gas::LAST_EPOCH_BLOCK_TALLY,
            Self::Unrecognized | Self::TooShort => gas::UNSUPPORTED,
        }
    }
}
