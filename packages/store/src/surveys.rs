//! # Survey and response stores
//!
//! [`SurveyStore`] holds published surveys keyed by their generated id;
//! [`ResponseStore`] appends submissions keyed `{survey_id}-{response_id}`.
//! Neither offers update or delete: surveys are immutable once written and
//! responses are never read back by the application.

use std::sync::Arc;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{generate_id, Survey, SurveyResponse};

#[derive(Clone, Debug)]
pub struct SurveyStore {
    inner: Arc<dyn KeyValueStore>,
}

impl SurveyStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Store `content` verbatim under a freshly generated id.
    pub async fn create(&self, content: &str) -> Result<Survey, StoreError> {
        let id = generate_id();
        self.inner.put(&id, content.as_bytes()).await?;
        tracing::debug!(survey_id = %id, "Survey created");
        Ok(Survey {
            id,
            content: content.to_string(),
        })
    }

    pub async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        self.inner.exists(id).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Survey>, StoreError> {
        let Some(raw) = self.inner.get(id).await? else {
            return Ok(None);
        };
        let content = String::from_utf8(raw).map_err(|_| StoreError::Encoding(id.to_string()))?;
        Ok(Some(Survey {
            id: id.to_string(),
            content,
        }))
    }

    /// Ids of every stored survey, sorted.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys().await
    }
}

#[derive(Clone, Debug)]
pub struct ResponseStore {
    inner: Arc<dyn KeyValueStore>,
}

impl ResponseStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Store `body` unmodified as a new response to `survey_id`.
    pub async fn record(&self, survey_id: &str, body: &[u8]) -> Result<SurveyResponse, StoreError> {
        let response = SurveyResponse {
            survey_id: survey_id.to_string(),
            response_id: generate_id(),
            body: body.to_vec(),
        };
        self.inner.put(&response.key(), &response.body).await?;
        tracing::debug!(survey_id, response_id = %response.response_id, "Response recorded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore};

    #[tokio::test]
    async fn test_create_and_get_survey() {
        let surveys = SurveyStore::new(Arc::new(MemoryStore::new()));
        let content = "<form><input name=\"q\"></form>";

        let survey = surveys.create(content).await.unwrap();
        assert!(surveys.exists(&survey.id).await.unwrap());

        let loaded = surveys.get(&survey.id).await.unwrap().unwrap();
        assert_eq!(loaded.content, content);
        assert!(surveys.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_surveys() {
        let dir = tempfile::tempdir().unwrap();
        let surveys = SurveyStore::new(Arc::new(FileStore::new(dir.path(), "html")));

        let a = surveys.create("a").await.unwrap();
        let b = surveys.create("b").await.unwrap();

        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(surveys.list().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_record_response_verbatim() {
        let backend = MemoryStore::new();
        let responses = ResponseStore::new(Arc::new(backend.clone()));

        let body = b"answer=<script>alert(1)</script>";
        let response = responses.record("survey-1", body).await.unwrap();

        assert!(response.key().starts_with("survey-1-"));
        assert_eq!(
            backend.get(&response.key()).await.unwrap().as_deref(),
            Some(&body[..])
        );
    }
}
