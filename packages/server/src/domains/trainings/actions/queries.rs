//! Training read operations

use anyhow::{Context, Result};

use crate::domains::trainings::models::Training;
use crate::kernel::ServerDeps;

/// All trainings, newest first.
pub async fn list_trainings(deps: &ServerDeps) -> Result<Vec<Training>> {
    deps.trainings.list().await.context("Failed to list trainings")
}
