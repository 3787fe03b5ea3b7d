//! Key/value store port for client state that survives restarts.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from a key/value store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(String),

    #[error("Store data is corrupt: {0}")]
    Corrupt(String),
}

/// Durable string key/value store.
///
/// Synchronous: the stored state is a handful of small values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and `--no-state` runs.
#[derive(Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "true").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_with_value() {
        let store = InMemoryStore::new().with_value("first_exchange_done", "true");
        assert_eq!(
            store.get("first_exchange_done").unwrap().as_deref(),
            Some("true")
        );
    }
}
