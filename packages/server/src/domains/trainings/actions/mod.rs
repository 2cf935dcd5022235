//! Training domain actions

mod create_training;
mod queries;

pub use create_training::{create_training, create_training_guarded};
pub use queries::list_trainings;
