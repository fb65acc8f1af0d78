//! Persistent key-value settings.
//!
//! The desktop app persists exactly one value today (the theme flag), but the
//! store stays a plain string-to-string map so the capability surface is the
//! narrow `get`/`set` pair the controllers expect.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::CoreError;

/// Narrow persistent key-value capability.
///
/// `set` is fallible but callers treat failures as non-fatal: the convention
/// throughout the core is to log a warning and continue with in-memory state.
pub trait Settings {
    /// Look up a stored value. Absent keys and unreadable backends both
    /// return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

impl<T: Settings + ?Sized> Settings for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }
}

/// In-memory settings, used in tests and as the degraded fallback when the
/// on-disk store is unavailable.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed settings stored as a flat JSON object.
///
/// The file is read once at open; every `set` writes the whole map back.
/// An absent or malformed file starts empty rather than failing open, so
/// opening the store never blocks application startup.
#[derive(Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileSettings {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "settings file malformed, starting empty"
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Settings for JsonFileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemorySettings::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn file_store_round_trips_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = JsonFileSettings::open(&path);
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileSettings::open(&path);
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileSettings::open(&path);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn missing_parent_directory_is_created_on_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileSettings::open(&path);
        store.set("theme", "light").unwrap();
        assert!(path.exists());
    }
}
