use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::middleware::RequireSession;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// `GET /api/session` - the signed-in caller, 401 otherwise
pub async fn session_handler(RequireSession(session): RequireSession) -> Json<SessionSummary> {
    Json(SessionSummary {
        user_id: session.user_id,
        email: session.email,
        name: session.name,
        expires_at: session.expires_at,
    })
}
