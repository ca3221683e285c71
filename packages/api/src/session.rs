//! # Session context and persistence
//!
//! - [`Visitor`] is the per-request view of the session. Handlers and the gate take it
//!   as an extractor instead of poking at raw session keys.
//! - [`FileSessionStore`] is the [`SessionStore`] the server runs with: one JSON file
//!   per session id under the configured data directory.
//!
//! Session keys:
//!
//! | Key | Type | Meaning |
//! |-----|------|---------|
//! | [`SESSION_LOGGED_IN_KEY`] | `bool` | Present once the visitor logged in or signed up. |
//! | [`SESSION_USER_KEY`] | `String` | Sanitized username of that account. |

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use time::OffsetDateTime;
use tokio::fs;
use tower_sessions::{
    session::{Error as SessionError, Id, Record},
    session_store::{self, SessionStore},
    Session,
};

/// Key for the logged-in flag.
pub const SESSION_LOGGED_IN_KEY: &str = "loggedin";

/// Key for the username.
pub const SESSION_USER_KEY: &str = "user";

/// Session state of the current request.
#[derive(Debug, Clone)]
pub struct Visitor {
    session: Session,
}

impl Visitor {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Whether the logged-in flag is present. Read failures count as logged out.
    pub async fn is_logged_in(&self) -> bool {
        match self.session.get::<bool>(SESSION_LOGGED_IN_KEY).await {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                false
            }
        }
    }

    pub async fn user(&self) -> Result<Option<String>, SessionError> {
        self.session.get(SESSION_USER_KEY).await
    }

    /// Mark the session as logged in for `user`.
    pub async fn log_in(&self, user: &str) -> Result<(), SessionError> {
        self.session.insert(SESSION_LOGGED_IN_KEY, true).await?;
        self.session.insert(SESSION_USER_KEY, user).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}

/// Filesystem-backed session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, id: &Id) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Remove every session file whose expiry has passed. Returns how many were removed.
    pub async fn delete_expired(&self) -> std::io::Result<usize> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let now = OffsetDateTime::now_utc();
        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let expired = match fs::read(&path).await {
                Ok(data) => serde_json::from_slice::<Record>(&data)
                    .map(|record| record.expiry_date <= now)
                    .unwrap_or(true),
                Err(_) => continue,
            };
            if expired && fs::remove_file(&path).await.is_ok() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

fn backend(e: std::io::Error) -> session_store::Error {
    session_store::Error::Backend(e.to_string())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        fs::create_dir_all(&self.dir).await.map_err(backend)?;
        let data =
            serde_json::to_vec(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;
        fs::write(self.path(&record.id), data).await.map_err(backend)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let path = self.path(session_id);
        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(backend(e)),
        };
        let record: Record = serde_json::from_slice(&data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;
        if record.expiry_date <= OffsetDateTime::now_utc() {
            let _ = fs::remove_file(&path).await;
            return Ok(None);
        }
        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        match fs::remove_file(self.path(session_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(backend(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use time::Duration;

    fn record(expiry_date: OffsetDateTime) -> Record {
        let mut data = HashMap::new();
        data.insert(SESSION_LOGGED_IN_KEY.to_string(), serde_json::json!(true));
        data.insert(SESSION_USER_KEY.to_string(), serde_json::json!("alice"));
        Record {
            id: Id::default(),
            data,
            expiry_date,
        }
    }

    #[tokio::test]
    async fn test_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("sessions"));
        let record = record(OffsetDateTime::now_utc() + Duration::seconds(300));

        store.save(&record).await.unwrap();
        let loaded = store.load(&record.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.data, record.data);

        store.delete(&record.id).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_none());
        store.delete(&record.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_record_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        let record = record(OffsetDateTime::now_utc() - Duration::seconds(1));

        store.save(&record).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_none());
        assert!(!store.path(&record.id).exists());
    }

    #[tokio::test]
    async fn test_delete_expired() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        let live = record(OffsetDateTime::now_utc() + Duration::seconds(300));
        let stale = record(OffsetDateTime::now_utc() - Duration::seconds(1));
        store.save(&live).await.unwrap();
        store.save(&stale).await.unwrap();

        assert_eq!(store.delete_expired().await.unwrap(), 1);
        assert!(store.load(&live.id).await.unwrap().is_some());
    }
}
