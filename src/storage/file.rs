//! File-backed storage adapter: one file per key under a data directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{StorageAdapter, StorageError};

/// Persists each key as a UTF-8 file in `data_dir`.
///
/// Keys are sanitized to filename-safe characters, so callers may use
/// arbitrary key strings. The directory is created on first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl StorageAdapter for FileStore {
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io(e.to_string()))?;

        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| StorageError::Io(e.to_string()))?;

        debug!("Persisted {} bytes under key {}", value.len(), key);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
