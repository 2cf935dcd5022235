use crate::common::{Priority, WorkStatus};
use crate::domains::trainings::models::{Training, TrainingType};
use serde::{Deserialize, Serialize};

/// Training as returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub progress: i32,
    pub status: WorkStatus,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub training_type: TrainingType,
    pub tags: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Training> for TrainingData {
    fn from(training: Training) -> Self {
        Self {
            id: training.id.to_string(),
            title: training.title,
            description: training.description,
            duration: training.duration,
            progress: training.progress,
            status: training.status,
            priority: training.priority,
            training_type: training.training_type,
            tags: training.tags,
            created_at: training.created_at.to_rfc3339(),
            updated_at: training.updated_at.to_rfc3339(),
        }
    }
}
