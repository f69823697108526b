//! In-memory backend for tests and throwaway sessions.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::StoreBackend;
use crate::error::KitResult;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> KitResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KitResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> KitResult<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }

    fn keys(&self) -> KitResult<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }
}
