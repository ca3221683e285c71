//! Credential store: one record per username holding the plaintext password.

use std::sync::Arc;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::Account;

#[derive(Clone, Debug)]
pub struct CredentialStore {
    inner: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Create the account, failing with [`StoreError::AccountExists`] if a record is
    /// already present. The check and the write are not atomic.
    pub async fn register(&self, account: &Account) -> Result<(), StoreError> {
        if self.inner.exists(&account.username).await? {
            return Err(StoreError::AccountExists(account.username.clone()));
        }
        self.inner
            .put(&account.username, account.password.as_bytes())
            .await
    }

    /// Stored password, exactly as it was registered.
    pub async fn password(&self, username: &str) -> Result<Option<String>, StoreError> {
        let Some(raw) = self.inner.get(username).await? else {
            return Ok(None);
        };
        let password =
            String::from_utf8(raw).map_err(|_| StoreError::Encoding(username.to_string()))?;
        Ok(Some(password))
    }

    /// Whether `password` matches the stored one. Missing accounts never match.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        Ok(self
            .password(username)
            .await?
            .is_some_and(|stored| stored == password))
    }
}
