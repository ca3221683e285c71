use axum::response::Html;
use serde::Deserialize;
use ui::Page;

use crate::error::AppError;
use crate::form::FormData;
use crate::session::Visitor;

pub mod account;
pub mod survey;

pub async fn index(visitor: Visitor) -> Result<Html<String>, AppError> {
    let user = visitor.user().await?.unwrap_or_default();
    Ok(Html(Page::Index { user }.render()))
}

pub async fn hacker() -> Html<String> {
    Html(Page::Hacker.render())
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

pub async fn search_form() -> Html<String> {
    Html(Page::Search.render())
}

/// Not backed by any index; echoes the query.
pub async fn search(FormData(form): FormData<SearchForm>) -> Html<String> {
    Html(Page::SearchResults { query: form.q }.render())
}
