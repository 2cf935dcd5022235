use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use tracing::error;

use super::DataResponse;
use crate::common::auth::{with_server_auth, RequestSession};
use crate::common::decode_json;
use crate::domains::projects::actions::{create_project, list_projects};
use crate::domains::projects::{CreateProjectInput, ProjectData, ProjectError};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/projects`
pub async fn list_projects_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<DataResponse<Vec<ProjectData>>>, ApiError> {
    let projects = list_projects(&state.deps).await.map_err(|e| {
        error!(error = %e, "Error fetching projects");
        ApiError::from(e)
    })?;

    Ok(Json(DataResponse::new(
        projects.into_iter().map(ProjectData::from).collect(),
    )))
}

/// `POST /api/projects`
///
/// The body is decoded behind the guard so an anonymous caller always gets
/// 401, whatever it sent.
pub async fn create_project_handler(
    Extension(state): Extension<AppState>,
    Extension(provider): Extension<Arc<RequestSession>>,
    body: Bytes,
) -> Result<(StatusCode, Json<DataResponse<ProjectData>>), ApiError> {
    let deps = state.deps.as_ref();
    let project = with_server_auth(|session, body: Bytes| async move {
        match decode_json::<CreateProjectInput>(&body) {
            Ok(input) => create_project(session, input, deps).await,
            Err(errors) => Err(ProjectError::Validation(errors)),
        }
    })
    .call(provider.as_ref(), body)
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(project.into()))))
}
