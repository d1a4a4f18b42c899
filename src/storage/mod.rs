//! Persistent key/value storage capability.
//!
//! The core never touches a storage medium directly. Everything goes
//! through [`StorageAdapter`], so each deployment target injects its own
//! backend: browser local storage, mobile async storage, or the adapters
//! shipped here (an in-memory map and a file-per-key store). Values are
//! opaque serialized text to the adapter.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Failure surfaced by a storage adapter.
///
/// The core recovers from every variant; these exist so adapters can say
/// what went wrong for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key/value persistence with string values.
///
/// `load` returns `Ok(None)` for an absent key rather than an error.
/// Writes are full overwrites; the last `save` for a key wins.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
}
