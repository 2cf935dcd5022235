//! Wire types for the HTTP API (camelCase JSON).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    #[default]
    Course,
    Workshop,
    Certification,
    Seminar,
    Bootcamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: WorkStatus,
    pub estimated_time: i32,
    pub progress: i32,
    pub tags: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: WorkStatus,
    pub estimated_time: i32,
    pub progress: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl NewProject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            priority: Priority::default(),
            status: WorkStatus::default(),
            estimated_time: 0,
            progress: 0,
            tags: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: i32,
    pub progress: i32,
    pub status: WorkStatus,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub training_type: TrainingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl NewTraining {
    pub fn new(title: impl Into<String>, duration: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            duration,
            progress: 0,
            status: WorkStatus::default(),
            priority: Priority::default(),
            training_type: TrainingType::default(),
            tags: None,
        }
    }
}

/// `{"data": ...}` envelope every successful API response uses
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_training_wire_shape() {
        let json = serde_json::to_value(NewTraining::new("Y", 4)).unwrap();
        assert_eq!(json["title"], "Y");
        assert_eq!(json["duration"], 4);
        assert_eq!(json["type"], "course");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_project_decodes_server_shape() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","name":"X","description":null,"priority":"high","status":"in_progress",
                "estimatedTime":3,"progress":10,"tags":null,
                "createdAt":"2024-01-01T00:00:00+00:00","updatedAt":"2024-01-01T00:00:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(project.priority, Priority::High);
        assert_eq!(project.status, WorkStatus::InProgress);
        assert_eq!(project.estimated_time, 3);
    }
}
