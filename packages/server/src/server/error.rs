//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::auth::{AuthError, GuardError};
use crate::common::FieldErrors;
use crate::domains::projects::ProjectError;
use crate::domains::trainings::TrainingError;

/// Error returned by route handlers.
///
/// Bodies: `{"error": "Unauthorized"}` (401), `{"errors": {field: message}}`
/// (422), `{"error": message}` (500).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ApiError::Unauthorized,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::Validation(errors) => ApiError::Validation(errors),
            store => ApiError::Internal(store.to_string()),
        }
    }
}

impl From<TrainingError> for ApiError {
    fn from(err: TrainingError) -> Self {
        match err {
            TrainingError::Validation(errors) => ApiError::Validation(errors),
            store => ApiError::Internal(store.to_string()),
        }
    }
}

impl<E: Into<ApiError>> From<GuardError<E>> for ApiError {
    fn from(err: GuardError<E>) -> Self {
        match err {
            GuardError::Unauthorized(auth) => auth.into(),
            GuardError::Operation(op) => op.into(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_denial_maps_to_401() {
        let err: ApiError = GuardError::<ProjectError>::Unauthorized(AuthError::Unauthorized).into();
        assert!(matches!(err, ApiError::Unauthorized));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_validation_maps_to_422() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name is required");
        let err: ApiError =
            GuardError::Operation(ProjectError::Validation(errors)).into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let err: ApiError =
            GuardError::Operation(TrainingError::Store(anyhow::anyhow!("db down"))).into();
        match &err {
            ApiError::Internal(message) => {
                assert_eq!(message, "Error creating a new training: db down")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
