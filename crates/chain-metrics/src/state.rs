//! State read capability consumed by the chain metrics precompile.
//!
//! The precompile only ever reads: one storage word per lookup, addressed by
//! `(contract address, 32-byte slot)`.

use crate::{
    error::ChainMetricsError,
    storage::{decode_word, encode_word},
};
use auto_impl::auto_impl;
use core::fmt::Debug;
use revm::{
    context_interface::{ContextTr, JournalTr},
    database_interface::Database,
    inspector::JournalExt,
    primitives::{Address, HashMap, B256},
};
use std::format;

/// Read-only access to contract storage.
#[auto_impl(&mut, Box)]
pub trait StateReader {
    /// Returns the word stored at `slot` of `address`. Unset slots read as zero.
    fn storage(&mut self, address: Address, slot: B256) -> Result<B256, ChainMetricsError>;
}

/// Storage snapshot held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryState {
    slots: HashMap<(Address, B256), B256>,
}

impl InMemoryState {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word at `slot` of `address`.
    pub fn insert(&mut self, address: Address, slot: B256, value: B256) {
        self.slots.insert((address, slot), value);
    }

    /// Builder form of [`InMemoryState::insert`].
    pub fn with_storage(mut self, address: Address, slot: B256, value: B256) -> Self {
        self.insert(address, slot, value);
        self
    }
}

impl StateReader for InMemoryState {
    fn storage(&mut self, address: Address, slot: B256) -> Result<B256, ChainMetricsError> {
        Ok(self
            .slots
            .get(&(address, slot))
            .copied()
            .unwrap_or_default())
    }
}

/// Reads storage through the journal of a REVM context.
///
/// Slots already held by the journal are served from it, so writes from
/// earlier in the same transaction are visible as they would be to an
/// `SLOAD`. Anything else is read from the database underneath. Nothing is
/// loaded into the journal: the account and its slots keep their cold/warm
/// status.
#[derive(Debug)]
pub struct JournalStateReader<'a, CTX> {
    context: &'a mut CTX,
}

impl<'a, CTX: ContextTr> JournalStateReader<'a, CTX> {
    /// Wrap a context.
    pub fn new(context: &'a mut CTX) -> Self {
        Self { context }
    }
}

impl<CTX: ContextTr<Journal: JournalExt>> StateReader for JournalStateReader<'_, CTX> {
    fn storage(&mut self, address: Address, slot: B256) -> Result<B256, ChainMetricsError> {
        let key = decode_word(&slot);
        let journal = self.context.journal_mut();

        if let Some(account) = journal.evm_state().get(&address) {
            if let Some(value) = account.storage.get(&key) {
                return Ok(encode_word(value.present_value));
            }
            // Storage of an account created in this transaction starts empty.
            if account.is_created() {
                return Ok(B256::ZERO);
            }
        }

        journal
            .db_mut()
            .storage(address, key)
            .map(encode_word)
            .map_err(storage_error)
    }
}

fn storage_error<E: Debug>(err: E) -> ChainMetricsError {
    ChainMetricsError::Storage(format!("{err:?}"))
}
