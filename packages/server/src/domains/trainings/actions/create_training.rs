//! Create training action

use tracing::{error, info};

use crate::common::auth::{with_server_auth, GuardError, Session, SessionProvider};
use crate::common::validate_form;
use crate::domains::trainings::errors::TrainingError;
use crate::domains::trainings::models::{CreateTrainingInput, Training};
use crate::kernel::ServerDeps;

pub async fn create_training(
    session: Session,
    input: CreateTrainingInput,
    deps: &ServerDeps,
) -> Result<Training, TrainingError> {
    let input = validate_form(input)?;

    info!(
        user_id = %session.user_id,
        title = %input.title,
        duration = input.duration,
        "Creating training"
    );

    deps.trainings
        .insert(&session.user_id, &input)
        .await
        .map_err(|e| {
            error!(user_id = %session.user_id, error = %e, "Training insert failed");
            TrainingError::Store(e)
        })
}

pub async fn create_training_guarded<P>(
    provider: &P,
    input: CreateTrainingInput,
    deps: &ServerDeps,
) -> Result<Training, GuardError<TrainingError>>
where
    P: SessionProvider + ?Sized,
{
    with_server_auth(|session, input| create_training(session, input, deps))
        .call(provider, input)
        .await
}
