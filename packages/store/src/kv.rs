//! # Key-value store abstraction
//!
//! Every persisted record in the application (accounts, surveys, responses) is a
//! flat blob addressed by a string key. [`KeyValueStore`] is the async interface the
//! typed stores talk to, so the handler logic never touches paths or file handles.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get`](KeyValueStore::get) | Read the blob under a key, `None` when absent. |
//! | [`put`](KeyValueStore::put) | Write (create or overwrite) the blob under a key. |
//! | [`exists`](KeyValueStore::exists) | Whether a blob is stored under a key. |
//! | [`keys`](KeyValueStore::keys) | Every stored key, sorted, without duplicates. |
//!
//! Implementations live in sibling modules ([`crate::FileStore`],
//! [`crate::MemoryStore`]). Neither provides cross-writer atomicity: a
//! check-then-write sequence can race with another writer on the same key.

use async_trait::async_trait;

use crate::error::StoreError;

/// Async interface for storing and retrieving flat records.
#[async_trait]
pub trait KeyValueStore: std::fmt::Debug + Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;

    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Reject keys that could escape the backend's namespace.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") || key.contains('\0') {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("alice").is_ok());
        assert!(check_key("0f8e-aa12").is_ok());
        assert!(check_key("").is_err());
        assert!(check_key("../etc/passwd").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key("a\\b").is_err());
    }
}
