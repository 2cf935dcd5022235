//! Create project action

use tracing::{error, info};

use crate::common::auth::{with_server_auth, GuardError, Session, SessionProvider};
use crate::common::validate_form;
use crate::domains::projects::errors::ProjectError;
use crate::domains::projects::models::{CreateProjectInput, Project};
use crate::kernel::ServerDeps;

/// Create a project owned by the session's user.
///
/// Callers outside this module go through [`create_project_guarded`].
pub async fn create_project(
    session: Session,
    input: CreateProjectInput,
    deps: &ServerDeps,
) -> Result<Project, ProjectError> {
    let input = validate_form(input)?;

    info!(user_id = %session.user_id, name = %input.name, "Creating project");

    deps.projects
        .insert(&session.user_id, &input)
        .await
        .map_err(|e| {
            error!(user_id = %session.user_id, error = %e, "Project insert failed");
            ProjectError::Store(e)
        })
}

/// [`create_project`] behind the session guard.
pub async fn create_project_guarded<P>(
    provider: &P,
    input: CreateProjectInput,
    deps: &ServerDeps,
) -> Result<Project, GuardError<ProjectError>>
where
    P: SessionProvider + ?Sized,
{
    with_server_auth(|session, input| create_project(session, input, deps))
        .call(provider, input)
        .await
}
