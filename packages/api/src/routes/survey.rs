//! # Survey routes
//!
//! | Route | Handler | Notes |
//! |-------|---------|-------|
//! | `GET /survey` | [`create_form`] | |
//! | `POST /survey` | [`create`] | Body is checked with [`contains_denylisted_tag`] first. |
//! | `GET /survey/{name}` | [`view`] | |
//! | `POST /survey/{name}` | [`submit`] | Raw body stored as-is, no tag filtering. |
//! | `GET /surveys` | [`list`] | |
//!
//! `{name}` is checked with [`is_valid_survey_name`] before any store access.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use ui::Page;

use crate::error::AppError;
use crate::filters::{contains_denylisted_tag, is_valid_survey_name};
use crate::form::FormData;
use crate::state::AppState;
use crate::HACKER_PATH;

#[derive(Debug, Deserialize)]
pub struct CreateSurveyForm {
    #[serde(default)]
    pub survey_form: String,
}

fn page(page: Page) -> Response {
    Html(page.render()).into_response()
}

pub async fn create_form() -> Html<String> {
    Html(Page::SurveyCreate.render())
}

pub async fn create(
    State(state): State<AppState>,
    FormData(form): FormData<CreateSurveyForm>,
) -> Result<Response, AppError> {
    if contains_denylisted_tag(&form.survey_form) {
        tracing::warn!("Survey rejected by tag filter");
        return Ok(Redirect::to(HACKER_PATH).into_response());
    }

    let survey = state.surveys.create(&form.survey_form).await?;
    tracing::info!(survey_id = %survey.id, "Survey published");
    Ok(page(Page::SurveySuccess {
        survey_id: survey.id,
    }))
}

pub async fn view(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    if !is_valid_survey_name(&name) {
        return Ok(Redirect::to(HACKER_PATH).into_response());
    }

    Ok(match state.surveys.get(&name).await? {
        Some(survey) => page(Page::ViewSurvey {
            survey_id: survey.id,
            form: survey.content,
        }),
        None => page(Page::NoSuchSurvey),
    })
}

pub async fn submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    if !is_valid_survey_name(&name) {
        return Ok(Redirect::to(HACKER_PATH).into_response());
    }
    if !state.surveys.exists(&name).await? {
        return Ok(page(Page::NoSuchSurvey));
    }

    state.responses.record(&name, &body).await?;
    Ok(page(Page::SubmissionReceived { survey_id: name }))
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let surveys = state.surveys.list().await?;
    Ok(Html(Page::SurveyList { surveys }.render()))
}
