//! Persistent key-value preference storage.
//!
//! The locale manager reads its persisted choice once at startup and writes
//! it on every language change. Storage sits behind [`PreferenceStore`] so the
//! page can use a file in a desktop shell and an in-memory map in tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preferences at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode preferences for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A small persistent string store that survives across sessions.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ==================== In-memory Store ====================

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// to inspect what the locale manager wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls performed so far.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    /// Current value under `key`, bypassing the trait.
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

// ==================== File Store ====================

/// JSON file store: one flat object of string keys to string values.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load the whole file. A missing file is empty; an unreadable JSON body
    /// is treated as empty too and gets replaced on the next write.
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!(
                    "Ignoring corrupt preferences file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        let body = serde_json::to_string_pretty(&values).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Stored preference {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStore Tests ====================

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("language").unwrap(), None);

        store.set("language", "fr").unwrap();
        assert_eq!(store.get("language").unwrap(), Some("fr".to_string()));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("language", "tr").unwrap();

        assert_eq!(observer.value("language"), Some("tr".to_string()));
        assert_eq!(observer.writes(), 1);
    }

    #[test]
    fn test_memory_store_with_value_is_not_a_write() {
        let store = MemoryStore::with_value("language", "ar");
        assert_eq!(store.value("language"), Some("ar".to_string()));
        assert_eq!(store.writes(), 0);
    }

    // ==================== FileStore Tests ====================

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.get("language").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStore::new(&path).set("language", "es").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("language").unwrap(), Some("es".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));

        store.set("theme", "dark").unwrap();
        store.set("language", "fr").unwrap();
        store.set("language", "ar").unwrap();

        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.get("language").unwrap(), Some("ar".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("language").unwrap(), None);

        store.set("language", "en").unwrap();
        assert_eq!(store.get("language").unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_file_store_unreadable_path_is_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = FileStore::new(dir.path());

        let err = store.get("language").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
