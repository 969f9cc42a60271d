//! Persistence contract and the in-memory reference store.

use {crate::account::StakeAccount, dashmap::DashMap, thiserror::Error};

/// Failure reported by an [`AccountStore`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct StoreError {
    pub reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Minimal key-value contract the ledger persists through.
///
/// Point reads and writes keyed by owner are all the ledger needs; it
/// serializes same-owner access itself, so implementations only have to be
/// internally consistent under concurrent calls for different owners.
pub trait AccountStore: Send + Sync {
    /// Fetch the stored account for `owner`, if any.
    fn get(&self, owner: &str) -> Result<Option<StakeAccount>, StoreError>;

    /// Persist the account under its owner key, replacing any prior value.
    fn put(&self, owner: &str, account: &StakeAccount) -> Result<(), StoreError>;
}

/// Concurrent in-memory store. The default backing for embedders, tests,
/// and benchmarks; durable stores live behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    accounts: DashMap<String, StakeAccount>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts ever written.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryStore {
    fn get(&self, owner: &str) -> Result<Option<StakeAccount>, StoreError> {
        Ok(self.accounts.get(owner).map(|entry| entry.value().clone()))
    }

    fn put(&self, owner: &str, account: &StakeAccount) -> Result<(), StoreError> {
        self.accounts.insert(owner.to_string(), account.clone());
        Ok(())
    }
}
