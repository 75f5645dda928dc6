//! # Snapshot Storage Trait
//!
//! Durable string-keyed store for serialized cart snapshots. The store
//! writes whole snapshots only; a save replaces any prior value under the
//! key. There is no acknowledged failure path on save, matching the
//! localStorage-style contract the cart was designed against.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Key-value string storage for cart snapshots
pub trait SnapshotStorage: Send + Sync {
    /// Read the value under key. Returns None if absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value under key, replacing any prior value.
    fn save(&self, key: &str, raw: &str);

    /// Remove a key from storage.
    fn remove(&self, key: &str);
}

/// Type alias for a shared snapshot store (dynamic dispatch)
pub type BoxedSnapshotStorage = Arc<dyn SnapshotStorage>;

/// Volatile in-memory storage, for tests and single-run sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key (test setup helper)
    pub fn seeded(key: &str, raw: &str) -> Self {
        let storage = Self::new();
        storage.save(key, raw);
        storage
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, raw: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), raw.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed storage: one JSON file per key under a directory.
///
/// Keys are sanitized to filenames; the directory is created on first save.
/// Write failures are logged and swallowed, per the trait contract.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, raw: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), %err, "could not create storage dir");
            return;
        }
        let path = self.path_for(key);
        if let Err(err) = std::fs::write(&path, raw) {
            warn!(path = %path.display(), %err, "snapshot write failed");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(err) = std::fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), %err, "snapshot remove failed");
            }
        }
    }
}
