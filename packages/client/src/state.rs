//! Local state persistence.
//!
//! One opaque JSON document per logical collection, addressed by a fixed
//! key, in the manner of browser localStorage. `FileStore` writes each
//! key to its own file; `MemoryStore` backs tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Error;

/// Storage keys, one per logical collection.
pub mod keys {
    pub const SESSION: &str = "sewa_session";
    pub const USERS: &str = "sewa_mock_users";
    pub const NGOS: &str = "sewa_mock_ngos";
    pub const BLOGS: &str = "sewa_mock_blogs";
    pub const GROUPS: &str = "sewa_mock_groups";
    pub const JOBS: &str = "sewa_mock_jobs";
    pub const APPLICATIONS: &str = "sewa_mock_applications";
}

/// Keyed JSON blob storage.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, Error>;
    fn put(&self, key: &str, value: &Value) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// Typed convenience layer over [`StateStore`].
pub trait StateStoreExt: StateStore {
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| Error::State(format!("corrupt record under {key}: {e}"))),
            None => Ok(None),
        }
    }

    fn put_as<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Error> {
        let value =
            serde_json::to_value(value).map_err(|e| Error::State(format!("serialize: {e}")))?;
        self.put(key, &value)
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}

/// File-per-key JSON store rooted at a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::State(format!("create {dir:?}: {e}")))?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, Error> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&path).map_err(|e| Error::State(format!("read {path:?}: {e}")))?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| Error::State(format!("parse {path:?}: {e}")))
    }

    fn put(&self, key: &str, value: &Value) -> Result<(), Error> {
        let path = self.path(key);
        let raw =
            serde_json::to_string_pretty(value).map_err(|e| Error::State(format!("encode: {e}")))?;
        fs::write(&path, raw).map_err(|e| Error::State(format!("write {path:?}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| Error::State(format!("remove {path:?}: {e}")))?;
        }
        Ok(())
    }
}

/// Purely in-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, Error> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &Value) -> Result<(), Error> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.get(keys::SESSION).unwrap().is_none());
        store
            .put(keys::SESSION, &json!({ "name": "Asha" }))
            .unwrap();
        assert_eq!(
            store.get(keys::SESSION).unwrap().unwrap()["name"],
            "Asha"
        );

        // Survives a fresh handle over the same directory.
        let reopened = FileStore::new(dir.path()).unwrap();
        assert!(reopened.get(keys::SESSION).unwrap().is_some());

        reopened.remove(keys::SESSION).unwrap();
        assert!(store.get(keys::SESSION).unwrap().is_none());
    }

    #[test]
    fn typed_accessors_reject_corrupt_records() {
        let store = MemoryStore::new();
        store.put(keys::USERS, &json!("not a list")).unwrap();
        let out: Result<Option<Vec<u32>>, Error> = store.get_as(keys::USERS);
        assert!(matches!(out, Err(Error::State(_))));
    }
}
