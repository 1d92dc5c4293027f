//! Key-value persistence backends
//!
//! Values are whole strings replaced in a single write, so readers never see
//! a partially written document.
//! - `LocalStorageBackend`: browser LocalStorage (wasm32)
//! - `FileBackend`: JSON map on disk with temp-file + rename (native)
//! - `MemoryBackend`: in-process map for tests and headless runs

use std::collections::HashMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBackend;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageBackend;

/// Failures writing to a backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage rejected write to {key}: {reason}")]
    Rejected { key: String, reason: String },
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous string key-value store surviving restarts
pub trait PersistenceBackend {
    /// Read a value, `None` when missing or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_replaces_values() {
        let mut backend = MemoryBackend::new();
        assert!(backend.is_empty());
        assert_eq!(backend.get("k"), None);

        backend.set("k", "one").unwrap();
        backend.set("k", "two").unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("two"));
        assert_eq!(backend.len(), 1);
    }
}
