//! # API crate: routes, admission gate and session handling
//!
//! Everything between the socket and the stores: the axum [`Router`], the gate
//! middleware every request passes through, the handlers, and the session layer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Layered configuration (defaults, `config.toml`, `SURVEY_*` env). |
//! | [`filters`] | Username sanitizing, survey-name check, tag denylist, referer/origin allow-list. |
//! | [`form`] | [`form::FormData`] extractor for urlencoded and multipart bodies. |
//! | [`gate`] | Middleware enforcing login and the allow-list, sets `X-XSS-Protection: 0`. |
//! | [`session`] | [`session::Visitor`] extractor and the file-backed session store. |
//! | [`routes`] | Handlers for accounts, surveys, search and the static pages. |
//! | [`state`] | [`AppState`] shared by handlers. |
//! | [`error`] | [`AppError`] and its HTTP mapping. |
//!
//! ## Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET/POST | `/login` | [`routes::account::login_form`] / [`routes::account::login`] |
//! | GET/POST | `/signup` | [`routes::account::signup_form`] / [`routes::account::signup`] |
//! | GET | `/` | [`routes::index`] |
//! | GET | `/hacker` | [`routes::hacker`] |
//! | GET/POST | `/search` | [`routes::search_form`] / [`routes::search`] |
//! | GET/POST | `/survey` | [`routes::survey::create_form`] / [`routes::survey::create`] |
//! | GET/POST | `/survey/{name}` | [`routes::survey::view`] / [`routes::survey::submit`] |
//! | GET | `/surveys` | [`routes::survey::list`] |

use axum::{middleware, routing::get, Router};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

pub mod error;
pub mod filters;
pub mod form;
pub mod gate;
pub mod routes;
pub mod session;
pub mod settings;
pub mod state;


pub use error::AppError;
pub use session::FileSessionStore;
pub use settings::Settings;
pub use state::AppState;

pub const INDEX_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const HACKER_PATH: &str = "/hacker";

/// All routes behind the admission gate. Requires a session layer on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INDEX_PATH, get(routes::index))
        .route(HACKER_PATH, get(routes::hacker))
        .route(
            LOGIN_PATH,
            get(routes::account::login_form).post(routes::account::login),
        )
        .route(
            SIGNUP_PATH,
            get(routes::account::signup_form).post(routes::account::signup),
        )
        .route("/search", get(routes::search_form).post(routes::search))
        .route(
            "/survey",
            get(routes::survey::create_form).post(routes::survey::create),
        )
        .route(
            "/survey/{name}",
            get(routes::survey::view).post(routes::survey::submit),
        )
        .route("/surveys", get(routes::survey::list))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::admission_gate,
        ))
        .with_state(state)
}

/// The full application: routes, session layer and request tracing.
pub fn app<Store>(state: AppState, session_store: Store, session: &settings::Session) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(session.cookie_name.clone())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(session.ttl_secs)));

    router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}
