//! Page-route protection.
//!
//! Only checks that the session cookie is present. The session guard on
//! every write is the real check.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::has_session_cookie;

/// Page prefixes that need a signed-in caller
pub const PROTECTED_ROUTES: &[&str] = &[
    "/projects",
    "/calendar",
    "/trainings",
    "/media",
    "/sticky-notes",
];

/// Prefixes the middleware never touches
pub const EXCLUDED_ROUTES: &[&str] = &["/api", "/_next/static", "/_next/image", "/favicon.ico"];

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGNED_IN_HOME: &str = "/projects";

fn has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_ROUTES.iter().any(|prefix| has_prefix(path, prefix))
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|prefix| has_prefix(path, prefix))
}

/// Where a page request should be sent instead, if anywhere.
pub fn redirect_target(path: &str, has_session: bool) -> Option<&'static str> {
    if is_excluded(path) {
        return None;
    }
    if is_protected(path) && !has_session {
        return Some(SIGN_IN_PATH);
    }
    if has_prefix(path, SIGN_IN_PATH) && has_session {
        return Some(SIGNED_IN_HOME);
    }
    None
}

pub async fn protected_routes_middleware(
    State(cookie_prefix): State<Arc<str>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    let has_session = has_session_cookie(request.headers(), &cookie_prefix);

    if let Some(target) = redirect_target(path, has_session) {
        debug!(path = %path, target = %target, "Redirecting page request");
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}
