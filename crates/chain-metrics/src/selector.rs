//! Classification of call input by its 4-byte function selector.

use crate::{
    constants::SELECTOR_LEN,
    interface::{SELECTOR_CURRENT_EPOCH, SELECTOR_LAST_EPOCH_BLOCK_TALLY},
};

/// The call a raw input is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricsCall {
    /// `currentEpoch()`
    CurrentEpoch,
    /// `lastEpochBlockTally(address)`
    LastEpochBlockTally,
    /// Four or more bytes whose selector is not supported.
    Unrecognized,
    /// Fewer than four bytes of input.
    TooShort,
}

impl MetricsCall {
    /// Classifies `input` by exact match on its first four bytes.
    pub fn classify(input: &[u8]) -> Self {
        let Some(selector) = input.first_chunk::<SELECTOR_LEN>() else {
            return Self::TooShort;
        };
        match *selector {
            SELECTOR_CURRENT_EPOCH => Self::CurrentEpoch,
            SELECTOR_LAST_EPOCH_BLOCK_TALLY => Self::LastEpochBlockTally,
            _ => Self::Unrecognized,
        }
    }

    /// Returns `true` for the calls this precompile serves.
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::CurrentEpoch | Self::LastEpochBlockTally)
    }
}
