mod training;

pub use training::TrainingData;
