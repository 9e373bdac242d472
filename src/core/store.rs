//! Local key-value persistence.
//!
//! Persistence is an explicit capability: a small trait owned by `App`
//! and injected at startup. The production implementation is a small
//! JSON file under the config directory; tests inject a memory store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::warn;

/// Minimal get/set capability. Implementations decide durability.
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// Write-through store backed by a single JSON object file.
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`. An unreadable or
    /// malformed file logs a warning and starts empty rather than
    /// failing the app over local bookkeeping.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Malformed store file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create store directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.values) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!("Failed to write store file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize store: {}", e),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.persist();
    }
}

/// Volatile store for tests and for when no home directory exists.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

const MY_QUOTES_KEY: &str = "my_quotes";

/// The "your quotes" list: ids of quotes submitted from this machine,
/// kept as a JSON array under one key of the injected store.
pub struct QuoteStore {
    inner: Box<dyn KvStore>,
}

impl QuoteStore {
    pub fn new(inner: Box<dyn KvStore>) -> Self {
        Self { inner }
    }

    pub fn ids(&self) -> Vec<String> {
        self.inner
            .get(MY_QUOTES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids().iter().any(|saved| saved == id)
    }

    /// Record a newly submitted quote id. Idempotent.
    pub fn remember(&mut self, id: &str) {
        let mut ids = self.ids();
        if !ids.iter().any(|saved| saved == id) {
            ids.push(id.to_string());
            self.save(&ids);
        }
    }

    /// Drop an id after the quote is deleted remotely.
    pub fn forget(&mut self, id: &str) {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|saved| saved != id);
        if ids.len() != before {
            self.save(&ids);
        }
    }

    fn save(&mut self, ids: &[String]) {
        match serde_json::to_string(ids) {
            Ok(json) => self.inner.set(MY_QUOTES_KEY, json),
            Err(e) => warn!("Failed to serialize quote ids: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> QuoteStore {
        QuoteStore::new(Box::new(MemoryStore::default()))
    }

    #[test]
    fn remember_and_forget_round_trip() {
        let mut store = memory_store();
        assert!(store.ids().is_empty());

        store.remember("a");
        store.remember("b");
        store.remember("a"); // idempotent
        assert_eq!(store.ids(), vec!["a", "b"]);
        assert!(store.contains("a"));

        store.forget("a");
        assert_eq!(store.ids(), vec!["b"]);
        assert!(!store.contains("a"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = QuoteStore::new(Box::new(FileStore::open(path.clone())));
            store.remember("persisted");
        }

        let store = QuoteStore::new(Box::new(FileStore::open(path)));
        assert_eq!(store.ids(), vec!["persisted"]);
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json {").unwrap();

        let store = FileStore::open(path);
        assert!(store.get(MY_QUOTES_KEY).is_none());
    }
}
