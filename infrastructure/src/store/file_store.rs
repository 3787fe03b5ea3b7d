//! JSON file backed key/value store.
//!
//! The whole map is read on every `get` and rewritten on every `set`; the
//! state is a couple of flags, so there is no caching.

use parley_application::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// `$XDG_DATA_HOME/parley/state.json`, if a data directory is known.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("parley").join("state.json"))
}

/// Key/value store kept as a flat JSON object in one file.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(format!("{}: {}", self.path.display(), e))),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("{}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        // Atomic replace
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        debug!("Stored {} in {}", key, self.path.display());
        Ok(())
    }
}
