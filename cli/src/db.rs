//! File-backed account store for the CLI.

use {
    mundial_staking_ledger::{AccountStore, StakeAccount, StoreError},
    parking_lot::Mutex,
    pickledb::{PickleDb, PickleDbDumpPolicy, SerializationMethod},
    std::path::Path,
};

const ACCOUNT_KEY_PREFIX: &str = "account:";

/// One YAML ledger file per path, accounts keyed by owner.
///
/// pickledb's `AutoDump` policy writes the file back on every set, so each
/// ledger operation lands as a single durable write.
pub struct LedgerDb {
    db: Mutex<PickleDb>,
}

impl LedgerDb {
    /// Open an existing ledger file, or start a fresh one if the path does
    /// not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = if path.exists() {
            PickleDb::load(path, PickleDbDumpPolicy::AutoDump, SerializationMethod::Yaml)
                .map_err(|err| StoreError::new(err.to_string()))?
        } else {
            PickleDb::new(path, PickleDbDumpPolicy::AutoDump, SerializationMethod::Yaml)
        };
        Ok(Self { db: Mutex::new(db) })
    }

    /// All owners present in the ledger file, sorted.
    pub fn owners(&self) -> Vec<String> {
        let db = self.db.lock();
        let mut owners: Vec<String> = db
            .get_all()
            .into_iter()
            .filter_map(|key| {
                key.strip_prefix(ACCOUNT_KEY_PREFIX)
                    .map(|owner| owner.to_string())
            })
            .collect();
        owners.sort();
        owners
    }

    fn account_key(owner: &str) -> String {
        format!("{ACCOUNT_KEY_PREFIX}{owner}")
    }
}

impl AccountStore for LedgerDb {
    fn get(&self, owner: &str) -> Result<Option<StakeAccount>, StoreError> {
        Ok(self
            .db
            .lock()
            .get::<StakeAccount>(&Self::account_key(owner)))
    }

    fn put(&self, owner: &str, account: &StakeAccount) -> Result<(), StoreError> {
        self.db
            .lock()
            .set(&Self::account_key(owner), account)
            .map_err(|err| StoreError::new(err.to_string()))
    }
}
