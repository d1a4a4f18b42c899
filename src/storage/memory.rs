//! In-memory storage adapter for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{StorageAdapter, StorageError};

/// Map-backed adapter; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStore {
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }
}
