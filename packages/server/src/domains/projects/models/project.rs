use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::validation::{check_percentage, check_required_text, FieldErrors, Validate};
use crate::common::{Priority, ProjectId, WorkStatus};

pub const PROJECT_NAME_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: WorkStatus,
    /// Hours
    pub estimated_time: i32,
    /// Percent complete
    pub progress: i32,
    /// Comma separated
    pub tags: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: WorkStatus,
    #[serde(default)]
    pub estimated_time: i32,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub tags: Option<String>,
}

impl CreateProjectInput {
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

impl Validate for CreateProjectInput {
    fn validate(&self, errors: &mut FieldErrors) {
        check_required_text(errors, "name", &self.name, PROJECT_NAME_MAX_LEN);
        if self.estimated_time < 0 {
            errors.add("estimatedTime", "estimatedTime cannot be negative");
        }
        check_percentage(errors, "progress", self.progress);
    }
}

// =============================================================================
// Project Queries
// =============================================================================

impl Project {
    pub async fn create(owner_id: &str, input: &CreateProjectInput, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO projects (id, name, description, priority, status, estimated_time, progress, tags, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(ProjectId::new())
        .bind(input.name.trim())
        .bind(&input.description)
        .bind(input.priority)
        .bind(input.status)
        .bind(input.estimated_time)
        .bind(input.progress)
        .bind(&input.tags)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: ProjectId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All projects, newest first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_owner(owner_id: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM projects WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Split `tags` into trimmed, non-empty entries.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
