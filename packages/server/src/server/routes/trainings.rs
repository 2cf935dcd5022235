use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use tracing::error;

use super::DataResponse;
use crate::common::auth::{with_server_auth, RequestSession};
use crate::common::decode_json;
use crate::domains::trainings::actions::{create_training, list_trainings};
use crate::domains::trainings::{CreateTrainingInput, TrainingData, TrainingError};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/trainings`
pub async fn list_trainings_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<DataResponse<Vec<TrainingData>>>, ApiError> {
    let trainings = list_trainings(&state.deps).await.map_err(|e| {
        error!(error = %e, "Error fetching trainings");
        ApiError::from(e)
    })?;

    Ok(Json(DataResponse::new(
        trainings.into_iter().map(TrainingData::from).collect(),
    )))
}

/// `POST /api/trainings`, body decoded behind the guard
pub async fn create_training_handler(
    Extension(state): Extension<AppState>,
    Extension(provider): Extension<Arc<RequestSession>>,
    body: Bytes,
) -> Result<(StatusCode, Json<DataResponse<TrainingData>>), ApiError> {
    let deps = state.deps.as_ref();
    let training = with_server_auth(|session, body: Bytes| async move {
        match decode_json::<CreateTrainingInput>(&body) {
            Ok(input) => create_training(session, input, deps).await,
            Err(errors) => Err(TrainingError::Validation(errors)),
        }
    })
    .call(provider.as_ref(), body)
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(training.into()))))
}
