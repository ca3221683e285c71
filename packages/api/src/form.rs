//! Form bodies in either browser encoding.
//!
//! [`FormData`] decodes `application/x-www-form-urlencoded` and `multipart/form-data`
//! into the same struct. Any other body carries no fields, so handlers see their
//! defaults and answer with their usual failure message.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::{value::MapDeserializer, DeserializeOwned};

#[derive(Debug)]
pub struct FormData<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum FormRejection {
    #[error("Failed to read form body: {0}")]
    Body(String),
    #[error("Failed to decode form: {0}")]
    Decode(String),
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl<S, T> FromRequest<S> for FormData<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| FormRejection::Body(e.body_text()))?;
            return multipart_fields(multipart).await.and_then(decode_fields);
        }

        let body = if content_type.starts_with("application/x-www-form-urlencoded") {
            Bytes::from_request(req, state)
                .await
                .map_err(|e| FormRejection::Body(e.body_text()))?
        } else {
            Bytes::new()
        };
        serde_urlencoded::from_bytes(&body)
            .map(FormData)
            .map_err(|e| FormRejection::Decode(e.to_string()))
    }
}

/// Text fields of a multipart body. File parts are skipped.
async fn multipart_fields(mut multipart: Multipart) -> Result<Vec<(String, String)>, FormRejection> {
    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormRejection::Body(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| FormRejection::Body(e.body_text()))?;
        fields.push((name, value));
    }
    Ok(fields)
}

fn decode_fields<T: DeserializeOwned>(fields: Vec<(String, String)>) -> Result<FormData<T>, FormRejection> {
    let deserializer: MapDeserializer<'_, _, serde::de::value::Error> =
        MapDeserializer::new(fields.into_iter());
    T::deserialize(deserializer)
        .map(FormData)
        .map_err(|e| FormRejection::Decode(e.to_string()))
}
