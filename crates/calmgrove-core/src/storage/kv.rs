//! Key-value storage abstraction.
//!
//! Local app state (the persisted session engine, auth/theme blobs) is
//! opaque key-string to JSON-string entries with no schema versioning.
//! The trait keeps the backend swappable: SQLite on disk, a HashMap in
//! tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

/// Minimal get/set/remove store over opaque string values.
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_remove() {
        let kv = MemoryKv::new();
        assert!(kv.get("engine").unwrap().is_none());
        kv.set("engine", "{}").unwrap();
        assert_eq!(kv.get("engine").unwrap().as_deref(), Some("{}"));
        kv.remove("engine").unwrap();
        assert!(kv.get("engine").unwrap().is_none());
    }
}
