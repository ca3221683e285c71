//! # Admission gate
//!
//! Middleware run in front of every route. It decides, from the request line, the
//! `Referer`/`Origin` headers and the session, whether the request reaches its handler.
//!
//! Checks, in order:
//!
//! 1. A present `Referer` must match the allow-list, else `/hacker`.
//! 2. A present `Origin` must match the allow-list, else `/hacker`.
//! 3. Outside `/login` and `/signup` the session must carry the logged-in flag, else `/login`.
//! 4. Submission methods without any `Referer` go to `/hacker`.
//!
//! Every response, redirects included, carries `X-XSS-Protection: 0`.

use axum::{
    extract::{Request, State},
    http::{
        header::{ORIGIN, REFERER},
        HeaderMap, HeaderName, HeaderValue, Method,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::filters::AllowList;
use crate::session::Visitor;
use crate::state::AppState;
use crate::{HACKER_PATH, LOGIN_PATH, SIGNUP_PATH};

const X_XSS_PROTECTION: HeaderName = HeaderName::from_static("x-xss-protection");

/// Why a request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ForeignReferer,
    ForeignOrigin,
    NotLoggedIn,
    MissingReferer,
}

impl Rejection {
    pub fn location(self) -> &'static str {
        match self {
            Rejection::NotLoggedIn => LOGIN_PATH,
            Rejection::ForeignReferer | Rejection::ForeignOrigin | Rejection::MissingReferer => {
                HACKER_PATH
            }
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        Redirect::to(self.location()).into_response()
    }
}

/// The parts of a request the gate looks at.
#[derive(Debug, Clone)]
pub struct Inbound {
    pub method: Method,
    pub path: String,
    pub referer: Option<String>,
    pub origin: Option<String>,
}

impl Inbound {
    pub fn from_request(request: &Request) -> Self {
        let headers = request.headers();
        Self {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            referer: header_value(headers, &REFERER),
            origin: header_value(headers, &ORIGIN),
        }
    }

    fn is_public(&self) -> bool {
        self.path == LOGIN_PATH || self.path == SIGNUP_PATH
    }

    fn is_submission(&self) -> bool {
        matches!(
            self.method,
            Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        )
    }
}

/// Non-UTF-8 header values are kept as empty strings so they fail the allow-list.
fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

/// Run the admission checks for one request.
pub async fn admit(
    allow_list: &AllowList,
    inbound: &Inbound,
    visitor: &Visitor,
) -> Result<(), Rejection> {
    if let Some(referer) = &inbound.referer {
        if !allow_list.permits(referer) {
            return Err(Rejection::ForeignReferer);
        }
    }
    if let Some(origin) = &inbound.origin {
        if !allow_list.permits(origin) {
            return Err(Rejection::ForeignOrigin);
        }
    }
    if !inbound.is_public() && !visitor.is_logged_in().await {
        return Err(Rejection::NotLoggedIn);
    }
    if inbound.referer.is_none() && inbound.is_submission() {
        return Err(Rejection::MissingReferer);
    }
    Ok(())
}

pub async fn admission_gate(
    State(state): State<AppState>,
    visitor: Visitor,
    request: Request,
    next: Next,
) -> Response {
    let inbound = Inbound::from_request(&request);
    let mut response = match admit(&state.allow_list, &inbound, &visitor).await {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            tracing::warn!(
                method = %inbound.method,
                path = %inbound.path,
                reason = ?rejection,
                "Request rejected by gate"
            );
            rejection.into_response()
        }
    };
    response
        .headers_mut()
        .insert(X_XSS_PROTECTION, HeaderValue::from_static("0"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_sessions::{MemoryStore, Session};

    fn inbound(method: Method, path: &str, referer: Option<&str>, origin: Option<&str>) -> Inbound {
        Inbound {
            method,
            path: path.to_string(),
            referer: referer.map(str::to_string),
            origin: origin.map(str::to_string),
        }
    }

    fn visitor() -> Visitor {
        Visitor::new(Session::new(None, std::sync::Arc::new(MemoryStore::default()), None))
    }

    async fn logged_in_visitor() -> Visitor {
        let visitor = visitor();
        visitor.log_in("alice").await.unwrap();
        visitor
    }

    const LOCAL: Option<&str> = Some("http://localhost:8085/");
    const FOREIGN: Option<&str> = Some("http://evil.example:80/");

    #[tokio::test]
    async fn test_anonymous_visitors() {
        let allow = AllowList::default();
        let anon = visitor();

        for path in ["/", "/surveys", "/survey", "/hacker", "/search"] {
            assert_eq!(
                admit(&allow, &inbound(Method::GET, path, None, None), &anon).await,
                Err(Rejection::NotLoggedIn),
                "{path}"
            );
        }
        assert_eq!(admit(&allow, &inbound(Method::GET, "/login", None, None), &anon).await, Ok(()));
        assert_eq!(admit(&allow, &inbound(Method::POST, "/signup", LOCAL, None), &anon).await, Ok(()));
    }

    #[tokio::test]
    async fn test_foreign_headers_win_over_login_redirect() {
        let allow = AllowList::default();
        let anon = visitor();

        assert_eq!(
            admit(&allow, &inbound(Method::GET, "/surveys", FOREIGN, None), &anon).await,
            Err(Rejection::ForeignReferer)
        );
        assert_eq!(
            admit(&allow, &inbound(Method::GET, "/login", None, FOREIGN), &anon).await,
            Err(Rejection::ForeignOrigin)
        );
        assert_eq!(
            admit(&allow, &inbound(Method::GET, "/login", LOCAL, FOREIGN), &anon).await,
            Err(Rejection::ForeignOrigin)
        );
    }

    #[tokio::test]
    async fn test_submission_requires_referer() {
        let allow = AllowList::default();
        let user = logged_in_visitor().await;

        assert_eq!(
            admit(&allow, &inbound(Method::POST, "/survey", None, None), &user).await,
            Err(Rejection::MissingReferer)
        );
        assert_eq!(
            admit(&allow, &inbound(Method::POST, "/login", None, None), &visitor()).await,
            Err(Rejection::MissingReferer)
        );
        assert_eq!(admit(&allow, &inbound(Method::POST, "/survey", LOCAL, None), &user).await, Ok(()));
        assert_eq!(admit(&allow, &inbound(Method::GET, "/survey", None, None), &user).await, Ok(()));
        assert_eq!(
            admit(&allow, &inbound(Method::POST, "/survey", LOCAL, Some("http://127.0.0.1:8085")), &user)
                .await,
            Ok(())
        );
    }

    #[test]
    fn test_rejection_locations() {
        assert_eq!(Rejection::NotLoggedIn.location(), "/login");
        assert_eq!(Rejection::ForeignReferer.location(), "/hacker");
        assert_eq!(Rejection::ForeignOrigin.location(), "/hacker");
        assert_eq!(Rejection::MissingReferer.location(), "/hacker");
    }
}
