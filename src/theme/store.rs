//! Key-value surface for user preferences (currently only the theme).

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::{Context, Result},
    std::path::PathBuf,
};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Last writer wins. Failures are logged, never raised.
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Flat JSON object on disk, rewritten on every `set`.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// A missing or unreadable file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring unreadable preferences: {:#}", e);
                }
                HashMap::new()
            }
        };
        Self { path, values }
    }

    fn read(path: &PathBuf) -> Result<HashMap<String, String>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    fn write(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write() {
            log::error!("Failed to persist preference '{}': {:#}", key, e);
        }
    }
}

/// Browser `localStorage`. Silently degrades to no-ops when storage is blocked.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::error!("localStorage rejected preference '{}'", key);
                }
            }
            None => log::warn!("localStorage unavailable; preference '{}' not saved", key),
        }
    }
}
