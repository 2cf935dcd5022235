// Trait definitions for dependency injection
//
// Storage seams only. Validation and access control live in the domain
// actions that call these.
//
// Naming convention: Base* for trait names (e.g., BaseProjectStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::projects::models::{CreateProjectInput, Project};
use crate::domains::trainings::models::{CreateTrainingInput, Training};

// =============================================================================
// Project Store
// =============================================================================

#[async_trait]
pub trait BaseProjectStore: Send + Sync {
    /// Insert a project owned by `owner_id` and return the stored row
    async fn insert(&self, owner_id: &str, input: &CreateProjectInput) -> Result<Project>;

    /// All projects, newest first
    async fn list(&self) -> Result<Vec<Project>>;
}

// =============================================================================
// Training Store
// =============================================================================

#[async_trait]
pub trait BaseTrainingStore: Send + Sync {
    async fn insert(&self, owner_id: &str, input: &CreateTrainingInput) -> Result<Training>;

    async fn list(&self) -> Result<Vec<Training>>;
}
