use crate::common::{Priority, WorkStatus};
use crate::domains::projects::models::Project;
use serde::{Deserialize, Serialize};

/// Project as returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
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

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name,
            description: project.description,
            priority: project.priority,
            status: project.status,
            estimated_time: project.estimated_time,
            progress: project.progress,
            tags: project.tags,
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}
