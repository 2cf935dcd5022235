pub mod actions;
pub mod data;
pub mod errors;
pub mod models;

pub use data::TrainingData;
pub use errors::TrainingError;
pub use models::{CreateTrainingInput, Training, TrainingType};
