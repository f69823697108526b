//! File-backed preference storage using redb.
//!
//! A single table maps preference keys to their serialized values.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use super::StoreBackend;
use crate::error::KitResult;

/// Table for preferences (key: preference key, value: JSON text)
pub(crate) const PREFERENCES_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("preferences");

/// redb database holding the preferences table
#[derive(Clone)]
pub struct RedbBackend {
    db: Arc<RwLock<Database>>,
}

impl RedbBackend {
    /// Open or create the database at `path`.
    ///
    /// This will:
    /// - Create the parent directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn open(path: impl AsRef<Path>) -> KitResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "opened preference database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl StoreBackend for RedbBackend {
    fn get(&self, key: &str) -> KitResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> KitResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> KitResult<bool> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let removed = table.remove(key)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    fn keys(&self) -> KitResult<Vec<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}
