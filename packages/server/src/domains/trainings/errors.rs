use thiserror::Error;

use crate::common::FieldErrors;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Invalid training: {0}")]
    Validation(#[from] FieldErrors),

    #[error("Error creating a new training: {0}")]
    Store(anyhow::Error),
}
