//! Test fixtures for the identity provider's tables.
//!
//! Tests share one database, so every fixture uses fresh ids.

use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A user id nobody else in the run will use
pub fn unique_user_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub async fn create_test_user(pool: &PgPool, user_id: &str, email: &str) -> Result<()> {
    sqlx::query("INSERT INTO users (id, email, name) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(email)
        .bind("Test User")
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert a session for `user_id` valid for `ttl` and return its token.
pub async fn create_test_session(pool: &PgPool, user_id: &str, ttl: Duration) -> Result<String> {
    let token = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO sessions (id, token, user_id, created_at, expires_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&token)
    .bind(user_id)
    .bind(Utc::now())
    .bind(Utc::now() + ttl)
    .execute(pool)
    .await?;
    Ok(token)
}
