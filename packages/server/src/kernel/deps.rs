//! Server dependencies (using traits for testability)
//!
//! Domain actions receive `&ServerDeps`; tests swap the Postgres stores for
//! the mocks in `test_dependencies`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::auth::{PgSessionStore, SessionStore};
use crate::domains::projects::models::{CreateProjectInput, Project};
use crate::domains::trainings::models::{CreateTrainingInput, Training};
use crate::kernel::{BaseProjectStore, BaseTrainingStore};

// =============================================================================
// Postgres adapters
// =============================================================================

/// Projects table behind `BaseProjectStore`
pub struct PgProjectStore(pub PgPool);

#[async_trait]
impl BaseProjectStore for PgProjectStore {
    async fn insert(&self, owner_id: &str, input: &CreateProjectInput) -> Result<Project> {
        Project::create(owner_id, input, &self.0).await
    }

    async fn list(&self) -> Result<Vec<Project>> {
        Project::find_all(&self.0).await
    }
}

/// Trainings table behind `BaseTrainingStore`
pub struct PgTrainingStore(pub PgPool);

#[async_trait]
impl BaseTrainingStore for PgTrainingStore {
    async fn insert(&self, owner_id: &str, input: &CreateTrainingInput) -> Result<Training> {
        Training::create(owner_id, input, &self.0).await
    }

    async fn list(&self) -> Result<Vec<Training>> {
        Training::find_all(&self.0).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared by every request
#[derive(Clone)]
pub struct ServerDeps {
    pub projects: Arc<dyn BaseProjectStore>,
    pub trainings: Arc<dyn BaseTrainingStore>,
    /// Read-only view of the identity provider's sessions
    pub sessions: Arc<dyn SessionStore>,
}

impl ServerDeps {
    pub fn new(
        projects: Arc<dyn BaseProjectStore>,
        trainings: Arc<dyn BaseTrainingStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            projects,
            trainings,
            sessions,
        }
    }

    /// Everything backed by one Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgProjectStore(pool.clone())),
            Arc::new(PgTrainingStore(pool.clone())),
            Arc::new(PgSessionStore::new(pool)),
        )
    }
}
