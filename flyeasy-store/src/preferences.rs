use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::StoreError;

/// String key-value storage for UI preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preferences kept in a JSON object on disk, e.g. `{"darkMode":"true"}`.
pub struct FilePreferenceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!("Ignoring unreadable preference file {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;

        info!("Preference saved: {} = {}", key, value);
        Ok(())
    }
}

/// Process-local preferences, lost on restart.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FilePreferenceStore::new(&path).set("darkMode", "true").unwrap();
        FilePreferenceStore::new(&path).set("other", "x").unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_corrupt_file_is_ignored_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.get("darkMode").unwrap(), None);

        store.set("darkMode", "false").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryPreferenceStore::new();
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
