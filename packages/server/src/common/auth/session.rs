use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session token as issued by the identity provider
pub type SessionToken = String;

/// Authenticated caller.
///
/// Produced and refreshed by the identity provider; this crate only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(skip_serializing, default)]
    pub token: SessionToken,
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    /// Session for `user_id` valid for `ttl` from now. Mostly for tests and
    /// local development, real sessions come from the store.
    pub fn for_user(user_id: impl Into<String>, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            token: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            email: None,
            name: None,
            created_at: now,
            expires_at: now + ttl,
            claims: serde_json::Map::new(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Read-only lookup of sessions by token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `token` if one exists, expired or not.
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>>;
}

// =============================================================================
// Postgres
// =============================================================================

/// Reads the identity provider's `sessions` and `users` tables.
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    token: String,
    user_id: String,
    email: Option<String>,
    name: Option<String>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            token: row.token,
            user_id: row.user_id,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
            expires_at: row.expires_at,
            claims: serde_json::Map::new(),
        }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT s.id, s.token, s.user_id, u.email, u.name, s.created_at, s.expires_at
            FROM sessions s
            LEFT JOIN users u ON u.id = s.user_id
            WHERE s.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Session::from))
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// In-memory session store for local development and tests.
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a session under its own token and return the token.
    pub async fn insert(&self, session: Session) -> SessionToken {
        let token = session.token.clone();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Remove a session (sign-out)
    pub async fn remove(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Drop expired sessions, returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemorySessionStore::new();
        let session = Session::for_user("u1", chrono::Duration::hours(1));

        let token = store.insert(session.clone()).await;
        assert_eq!(token, session.token);

        let found = store.find_by_token(&token).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let store = MemorySessionStore::new();
        assert!(store.find_by_token("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemorySessionStore::new();
        let token = store
            .insert(Session::for_user("u1", chrono::Duration::hours(1)))
            .await;

        store.remove(&token).await;
        assert!(store.find_by_token(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let store = MemorySessionStore::new();
        store
            .insert(Session::for_user("live", chrono::Duration::hours(24)))
            .await;
        store
            .insert(Session::for_user("stale", chrono::Duration::hours(-1)))
            .await;

        assert_eq!(store.cleanup_expired().await, 1);
        assert_eq!(store.len().await, 1);
    }

    #[test]
    fn test_expiry() {
        let session = Session::for_user("u1", chrono::Duration::hours(1));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.expires_at));
    }

    #[test]
    fn test_token_not_serialized() {
        let session = Session::for_user("u1", chrono::Duration::hours(1));
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(json["user_id"], "u1");
    }
}
