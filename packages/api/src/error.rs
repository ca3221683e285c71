use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Storage error: {0}")]
    Store(#[from] store::StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status = match self {
            AppError::Session { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, "Internal error").into_response()
    }
}
