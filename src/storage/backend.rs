//! Key-value backends for durable preference storage.
//!
//! A backend holds string values under string keys, like browser local
//! storage. Two implementations are provided: [`MemoryStore`] for tests and
//! ephemeral sessions, and [`FileStore`] which keeps one file per key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Storage backend errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Quota exceeded: {needed} bytes needed, limit is {limit} bytes")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// A durable string-to-string slot store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    /// Limit on the total bytes of keys plus values
    quota_bytes: Option<usize>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty, unlimited store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            quota_bytes: None,
            available: AtomicBool::new(true),
        }
    }

    /// Create an empty store that rejects writes past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    /// Toggle availability. An unavailable store fails every call, as a
    /// browser does when storage is disabled.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable("storage is disabled".to_string()))
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let mut entries = self.lock()?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Directory-backed store with one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    /// Limit on the size of a single value
    quota_bytes: Option<usize>,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota_bytes: None,
        }
    }

    /// Limit each stored value to `quota_bytes`.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Store rooted in the platform data directory.
    pub fn open_default() -> Self {
        Self::new(super::config::get_data_dir().join("local-storage"))
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if key.is_empty() || key.starts_with('.') || !valid_chars {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    needed: value.len(),
                    limit,
                });
            }
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io(e.to_string()))?;

        // Write beside the target then rename, so a failed write keeps the old value
        let tmp_path = self.dir.join(format!(".{}.tmp", key));
        std::fs::write(&tmp_path, value)
            .and_then(|()| std::fs::rename(&tmp_path, &path))
            .map_err(|e| {
                let _ = std::fs::remove_file(&tmp_path);
                StorageError::Io(e.to_string())
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
