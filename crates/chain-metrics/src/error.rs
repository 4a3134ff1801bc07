//! Errors raised by the chain metrics precompile.
//!
//! Only integration faults are errors. Malformed calls never produce one;
//! they are answered with empty output instead.

use revm::precompile::PrecompileError;
use std::string::String;

/// Chain metrics precompile error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainMetricsError {
    /// The precompile was invoked through a path without state access.
    #[error("stateful precompile requires state")]
    RequiresState,
    /// The backing state failed to serve a storage read.
    #[error("storage read failed: {0}")]
    Storage(String),
}

impl ChainMetricsError {
    /// Returns `true` if this is [`ChainMetricsError::RequiresState`].
    pub const fn is_requires_state(&self) -> bool {
        matches!(self, Self::RequiresState)
    }
}

impl From<ChainMetricsError> for PrecompileError {
    fn from(err: ChainMetricsError) -> Self {
        PrecompileError::Other(err.to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_state_message() {
        let err = ChainMetricsError::RequiresState;
        assert!(err.is_requires_state());
        assert_eq!(err.to_string(), "stateful precompile requires state");
    }

    #[test]
    fn test_into_precompile_error() {
        let err: PrecompileError = ChainMetricsError::Storage("db closed".into()).into();
        assert!(!err.is_oog());
        assert!(matches!(err, PrecompileError::Other(_)));
    }
}
