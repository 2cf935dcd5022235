use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::common::auth::{authorize, Authorization, RequestSession, Session, SessionStore};
use crate::server::error::ApiError;

/// State for [`session_auth_middleware`]
#[derive(Clone)]
pub struct SessionAuthState {
    pub store: Arc<dyn SessionStore>,
    pub cookie_prefix: Arc<str>,
}

/// Name of the identity provider's session cookie.
pub fn session_cookie_name(prefix: &str) -> String {
    format!("{}.session_token", prefix)
}

/// Middleware that attaches a lazily resolved [`RequestSession`] to the request.
///
/// Does NOT block requests. Handlers that write go through the session guard,
/// which is where the lookup actually happens.
pub async fn session_auth_middleware(
    State(state): State<SessionAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = extract_session_token(request.headers(), &state.cookie_prefix);
    let session = RequestSession::new(token, state.store.clone());
    request.extensions_mut().insert(Arc::new(session));

    next.run(request).await
}

/// Session token from the session cookie, falling back to the Authorization
/// header (`Bearer <token>` or the bare token).
pub fn extract_session_token(headers: &HeaderMap, cookie_prefix: &str) -> Option<String> {
    let cookie_name = session_cookie_name(cookie_prefix);
    if let Some(value) = cookie_value(headers, &cookie_name) {
        let token = token_from_cookie(&value);
        if !token.is_empty() {
            return Some(token);
        }
    }

    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// True when the request carries the session cookie at all.
pub fn has_session_cookie(headers: &HeaderMap, cookie_prefix: &str) -> bool {
    cookie_value(headers, &session_cookie_name(cookie_prefix)).is_some()
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Cookie values are URL-encoded `<token>.<signature>`.
fn token_from_cookie(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    match decoded.split_once('.') {
        Some((token, _signature)) => token.to_string(),
        None => decoded,
    }
}

/// Extractor for handlers that need the signed-in caller.
///
/// Rejects with 401 when there is no live session.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let provider = parts
            .extensions
            .get::<Arc<RequestSession>>()
            .cloned()
            .ok_or(ApiError::Unauthorized)?;

        match authorize(provider.as_ref()).await {
            Authorization::Authorized(session) => Ok(RequireSession(session)),
            Authorization::Denied(err) => Err(err.into()),
        }
    }
}
