//! File-backed key-value store on top of redb
//!
//! One table, `entries`, maps string keys to string values. Every call runs
//! in its own transaction, so a successful `set` is durable when it returns.

use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition, TableError};
use riffle_core::{KeyValueStore, StorageSettings};

use crate::error::{Result, StorageError};

const ENTRIES: TableDefinition<&str, &str> = TableDefinition::new("entries");

/// Durable [`KeyValueStore`] stored in a single redb file
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Database::create(path).map_err(StorageError::database)?;
        tracing::debug!(path = %path.display(), "Opened key-value store");
        Ok(Self { db })
    }

    /// Open the database configured in `settings`
    pub fn from_settings(settings: &StorageSettings) -> Result<Self> {
        Self::open(&settings.path)
    }

    /// All stored keys, in key order
    pub fn keys(&self) -> Result<Vec<String>> {
        let txn = self.db.begin_read().map_err(StorageError::database)?;
        let table = match txn.open_table(ENTRIES) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::database(e)),
        };

        let mut keys = Vec::new();
        for entry in table.iter().map_err(StorageError::database)? {
            let (key, _) = entry.map_err(StorageError::database)?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let txn = self.db.begin_read().map_err(StorageError::database)?;
        let table = match txn.open_table(ENTRIES) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StorageError::database(e)),
        };

        let value = table
            .get(key)
            .map_err(StorageError::database)?
            .map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn write(&self, key: &str, value: Option<&str>) -> Result<()> {
        let txn = self.db.begin_write().map_err(StorageError::database)?;
        {
            let mut table = txn.open_table(ENTRIES).map_err(StorageError::database)?;
            match value {
                Some(value) => {
                    table.insert(key, value).map_err(StorageError::database)?;
                }
                None => {
                    table.remove(key).map_err(StorageError::database)?;
                }
            }
        }
        txn.commit().map_err(StorageError::database)?;
        Ok(())
    }
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> riffle_core::Result<Option<String>> {
        Ok(self.read(key)?)
    }

    fn set(&self, key: &str, value: &str) -> riffle_core::Result<()> {
        Ok(self.write(key, Some(value))?)
    }

    fn remove(&self, key: &str) -> riffle_core::Result<()> {
        Ok(self.write(key, None)?)
    }
}
