//! # Domain models for accounts, surveys and responses
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Account`] | A registered user. The password is kept in plaintext, exactly as submitted. |
//! | [`Survey`] | A published survey: generated id plus the raw HTML body. |
//! | [`SurveyResponse`] | One submission against a survey, stored under `{survey_id}-{response_id}`. |
//!
//! Survey and response ids are lowercase hyphenated UUIDv4 strings, so they always
//! satisfy the `[0-9a-z-]` character class the survey routes accept.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A published survey.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    /// Raw HTML, stored and served verbatim.
    pub content: String,
}

/// A single submission against a survey.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub survey_id: String,
    pub response_id: String,
    pub body: Vec<u8>,
}

impl SurveyResponse {
    /// Key the response is stored under.
    pub fn key(&self) -> String {
        format!("{}-{}", self.survey_id, self.response_id)
    }
}

/// Generate a fresh identifier for a survey or response.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
