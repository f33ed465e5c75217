//! Client-side key-value storage backing the session
//!
//! `localStorage` in the browser, a JSON file on native targets.

use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("client storage is not available")]
    Unavailable,
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("browser storage rejected the operation: {0}")]
    Browser(String),
}

/// String key-value store with `localStorage` semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Volatile store, used in tests and when nothing better is available
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// JSON object file, rewritten on every mutation
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt storage file {:?}: {e}", path);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read storage file {:?}: {e}", path);
                BTreeMap::new()
            }
        };

        Self { path, items }
    }

    /// `<data_dir>/AdminPortal/storage.json`
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
            .join("AdminPortal")
            .join("storage.json")
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Browser(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Browser(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Browser(format!("{e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Browser(format!("{e:?}")))
    }
}

/// The platform's persistent store, or memory if none can be opened
pub fn open_default() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!("localStorage unavailable, session will not persist: {e}");
                Box::new(MemoryStorage::default())
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = FileStorage::default_path();
        tracing::debug!("Session storage: {:?}", path);
        Box::new(FileStorage::open(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "admin-portal-storage-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("storage.json")
    }

    #[test]
    fn memory_storage_behaves_like_local_storage() {
        let mut store = MemoryStorage::default();
        assert_eq!(store.get_item("token").unwrap(), None);

        store.set_item("token", "abc").unwrap();
        store.set_item("token", "def").unwrap();
        assert_eq!(store.get_item("token").unwrap().as_deref(), Some("def"));

        store.remove_item("token").unwrap();
        store.remove_item("token").unwrap();
        assert_eq!(store.get_item("token").unwrap(), None);
    }

    #[test]
    fn file_storage_persists_across_opens() {
        let path = scratch_file("persist");

        let mut store = FileStorage::open(&path);
        assert_eq!(store.get_item("isAuthenticated").unwrap(), None);
        store.set_item("isAuthenticated", "true").unwrap();
        store.set_item("token", "dummy-token").unwrap();

        let mut reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item("isAuthenticated").unwrap().as_deref(), Some("true"));
        reopened.remove_item("token").unwrap();

        let last = FileStorage::open(&path);
        assert_eq!(last.get_item("token").unwrap(), None);
        assert_eq!(last.get_item("isAuthenticated").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let path = scratch_file("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStorage::open(&path);
        assert_eq!(store.get_item("isAuthenticated").unwrap(), None);

        // next write replaces the garbage
        store.set_item("isAuthenticated", "false").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.get("isAuthenticated").map(String::as_str), Some("false"));
    }
}
