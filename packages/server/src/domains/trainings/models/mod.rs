pub mod training;

pub use training::{CreateTrainingInput, Training, TrainingType, TRAINING_TITLE_MAX_LEN};
