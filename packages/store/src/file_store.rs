//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps one file per key in
//! a single directory, all sharing one extension. It is what the server runs with.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── <key>.<extension>     # raw record bytes
//! └── ...
//! ```
//!
//! The default deployment uses three instances:
//!
//! | Store | Directory | Extension |
//! |-------|-----------|-----------|
//! | Credentials | `./users` | `dat` |
//! | Surveys | `./forms` | `html` |
//! | Responses | `./data/form-data` | `dat` |
//!
//! Writes go straight to the target file with no locking or temp-file rename.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::StoreError;
use crate::kv::{check_key, KeyValueStore};

/// Filesystem-backed KeyValueStore, one file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    extension: String,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    /// Create the base directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base).await?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        check_key(key)?;
        Ok(self.base.join(format!("{}.{}", key, self.extension)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)?).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, data).await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match fs::metadata(self.path_for(key)?).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match fs::read_dir(&self.base).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let suffix = format!(".{}", self.extension);
        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(key) = name.strip_suffix(&suffix) {
                if !key.is_empty() {
                    keys.push(key.to_string());
                }
            }
        }
        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("forms"), "html");

        assert!(store.get("missing").await.unwrap().is_none());
        assert!(!store.exists("missing").await.unwrap());

        store.put("abc-123", b"<form></form>").await.unwrap();
        assert!(store.exists("abc-123").await.unwrap());
        assert_eq!(
            store.get("abc-123").await.unwrap().as_deref(),
            Some(&b"<form></form>"[..])
        );

        // Re-open from same directory
        let store2 = FileStore::new(dir.path().join("forms"), "html");
        assert_eq!(store2.keys().await.unwrap(), vec!["abc-123".to_string()]);
        assert!(dir.path().join("forms").join("abc-123.html").is_file());
    }

    #[tokio::test]
    async fn test_keys_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "html");
        store.put("b", b"2").await.unwrap();
        store.put("a", b"1").await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join(".html"), "x").unwrap();

        assert_eq!(store.keys().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_keys_of_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope"), "dat");
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "dat");
        assert!(matches!(
            store.put("../escape", b"x").await,
            Err(StoreError::InvalidKey(_))
        ));
    }
}
