//! File-backed store for native builds
//!
//! The whole map is one JSON document. Writes go to `<path>.tmp` first and
//! are renamed over the save file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceBackend, StorageError};

#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileBackend {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing or corrupt file starts an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Store at {} is corrupt, starting empty: {e}", path.display());
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        log::info!("Opened store {} ({} keys)", path.display(), values.len());
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PersistenceBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in step with disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("heart-snake-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join("store.json")
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = scratch_path("reopen");
        let _ = fs::remove_file(&path);

        let mut store = FileBackend::open(&path);
        store.set("ranking", "[]").unwrap();
        drop(store);

        let store = FileBackend::open(&path);
        assert_eq!(store.get("ranking").as_deref(), Some("[]"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_failed_flush_rolls_back() {
        let dir = scratch_path("rollback").with_file_name("missing-dir");
        let _ = fs::remove_dir_all(&dir);
        let mut store = FileBackend::open(dir.join("store.json"));

        assert!(store.set("ranking", "[]").is_err());
        assert_eq!(store.get("ranking"), None);
        assert!(!dir.exists());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let store = FileBackend::open(&path);
        assert_eq!(store.get("ranking"), None);
    }
}
