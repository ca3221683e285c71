//! Login and signup.
//!
//! Failures answer with a short plain-text message rather than an HTTP error, the
//! success path marks the session logged in and redirects to the index.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use store::{Account, StoreError};
use ui::Page;

use crate::error::AppError;
use crate::filters::sanitize_username;
use crate::form::FormData;
use crate::session::Visitor;
use crate::state::AppState;
use crate::INDEX_PATH;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PASSWORD_MISMATCH: &str = "Password must match confirmation password";
pub const USER_EXISTS: &str = "User exists";
pub const REGISTRATION_FAILED_EXCEPTIONALLY: &str = "Registration failed exceptionally";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirmp: String,
}

pub async fn login_form() -> Html<String> {
    Html(Page::Login.render())
}

pub async fn login(
    State(state): State<AppState>,
    visitor: Visitor,
    FormData(form): FormData<LoginForm>,
) -> Result<Response, AppError> {
    let user = sanitize_username(&form.user);
    if user.is_empty() || form.password.is_empty() {
        return Ok(LOGIN_FAILED.into_response());
    }

    match state.accounts.verify(&user, &form.password).await {
        Ok(true) => {}
        Ok(false) => return Ok(LOGIN_FAILED.into_response()),
        Err(e) => {
            tracing::warn!(user = %user, "Failed to read account: {}", e);
            return Ok(LOGIN_FAILED.into_response());
        }
    }

    visitor.log_in(&user).await?;
    tracing::info!(user = %user, "Logged in");
    Ok(Redirect::to(INDEX_PATH).into_response())
}

pub async fn signup_form() -> Html<String> {
    Html(Page::Signup.render())
}

pub async fn signup(
    State(state): State<AppState>,
    visitor: Visitor,
    FormData(form): FormData<SignupForm>,
) -> Result<Response, AppError> {
    let user = sanitize_username(&form.user);
    if user.is_empty() || form.password.is_empty() {
        return Ok(REGISTRATION_FAILED.into_response());
    }
    if form.password != form.confirmp {
        return Ok(PASSWORD_MISMATCH.into_response());
    }

    match state.accounts.register(&Account::new(user.as_str(), form.password)).await {
        Ok(()) => {}
        Err(StoreError::AccountExists(_)) => return Ok(USER_EXISTS.into_response()),
        Err(e) => {
            tracing::error!(user = %user, "Failed to register account: {}", e);
            return Ok(REGISTRATION_FAILED_EXCEPTIONALLY.into_response());
        }
    }

    visitor.log_in(&user).await?;
    tracing::info!(user = %user, "Account created");
    Ok(Redirect::to(INDEX_PATH).into_response())
}
