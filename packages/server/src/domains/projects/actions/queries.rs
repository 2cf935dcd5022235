//! Project read operations

use anyhow::{Context, Result};

use crate::domains::projects::models::Project;
use crate::kernel::ServerDeps;

/// All projects, newest first.
pub async fn list_projects(deps: &ServerDeps) -> Result<Vec<Project>> {
    deps.projects.list().await.context("Failed to list projects")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::auth::Session;
    use crate::domains::projects::actions::create_project;
    use crate::domains::projects::models::CreateProjectInput;
    use crate::kernel::{MockProjectStore, TestDependencies};

    #[tokio::test]
    async fn test_lists_newest_first() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();
        let session = Session::for_user("u1", chrono::Duration::hours(1));

        create_project(session.clone(), CreateProjectInput::named("first"), &deps)
            .await
            .unwrap();
        create_project(session, CreateProjectInput::named("second"), &deps)
            .await
            .unwrap();

        let names: Vec<String> = list_projects(&deps)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let test_deps = TestDependencies::new().mock_projects(MockProjectStore::failing("db down"));
        let err = list_projects(&test_deps.server_deps()).await.unwrap_err();
        assert!(format!("{:#}", err).contains("db down"));
    }
}
