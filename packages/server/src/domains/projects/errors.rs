use thiserror::Error;

use crate::common::FieldErrors;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Invalid project: {0}")]
    Validation(#[from] FieldErrors),

    #[error("Error creating project: {0}")]
    Store(anyhow::Error),
}
