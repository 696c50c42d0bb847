//! # Persistent Storage
//!
//! String key/value storage that outlives the process, used for the session
//! token, the signed-in user and the cached profile. Values are opaque
//! strings; typed values go through [`read_json`] and [`write_json`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{AppError, Result};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const PROFILE_KEY: &str = "userProfile";

pub trait PersistentStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Decode a JSON value; a corrupt entry reads as absent.
pub fn read_json<T: DeserializeOwned>(storage: &dyn PersistentStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Ignoring unreadable stored value");
            None
        }
    }
}

pub fn write_json<T: Serialize>(storage: &dyn PersistentStorage, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|e| AppError::Storage(e.to_string()))?;
    storage.set(key, &raw)
}

/// Process-local storage for tests and one-shot commands.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object on disk.
///
/// The whole file is rewritten on every change. Parent directories are
/// created on first write. A change becomes visible to `get` only after it
/// has been written, so memory never runs ahead of the file.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    AppError::Storage(format!("Corrupt session file {}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened session storage");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PersistentStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "jwt").unwrap();
        storage.set(USER_KEY, r#"{"_id":"u1"}"#).unwrap();
        storage.remove(USER_KEY).unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("jwt"));
        assert_eq!(reopened.get(USER_KEY), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(FileStorage::open(&path), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let storage = FileStorage::open(blocker.join("session.json")).unwrap();

        assert!(matches!(storage.set(TOKEN_KEY, "jwt"), Err(AppError::Storage(_))));
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_failed_remove_keeps_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("session.json");
        let storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "jwt").unwrap();

        // Replace the directory with a file so the next write fails
        std::fs::remove_dir_all(dir.path().join("state")).unwrap();
        std::fs::write(dir.path().join("state"), "").unwrap();

        assert!(storage.remove(TOKEN_KEY).is_err());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt"));
    }

    #[test]
    fn test_unreadable_json_value_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set(PROFILE_KEY, "garbage").unwrap();
        assert_eq!(read_json::<serde_json::Value>(&storage, PROFILE_KEY), None);

        write_json(&storage, PROFILE_KEY, &serde_json::json!({ "a": 1 })).unwrap();
        assert_eq!(
            read_json::<serde_json::Value>(&storage, PROFILE_KEY),
            Some(serde_json::json!({ "a": 1 }))
        );
    }
}
