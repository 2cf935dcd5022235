use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::validation::{check_percentage, check_required_text, FieldErrors, Validate};
use crate::common::{Priority, TrainingId, WorkStatus};

pub const TRAINING_TITLE_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "training_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    #[default]
    Course,
    Workshop,
    Certification,
    Seminar,
    Bootcamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Training {
    pub id: TrainingId,
    pub title: String,
    pub description: Option<String>,
    /// Hours
    pub duration: i32,
    /// Percent complete
    pub progress: i32,
    pub status: WorkStatus,
    pub priority: Priority,
    pub training_type: TrainingType,
    pub tags: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration: i32,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub status: WorkStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, rename = "type")]
    pub training_type: TrainingType,
    #[serde(default)]
    pub tags: Option<String>,
}

impl CreateTrainingInput {
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

impl Validate for CreateTrainingInput {
    fn validate(&self, errors: &mut FieldErrors) {
        check_required_text(errors, "title", &self.title, TRAINING_TITLE_MAX_LEN);
        if self.duration <= 0 {
            errors.add("duration", "duration must be a positive number of hours");
        }
        check_percentage(errors, "progress", self.progress);
    }
}

// =============================================================================
// Training Queries
// =============================================================================

impl Training {
    pub async fn create(owner_id: &str, input: &CreateTrainingInput, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO trainings (id, title, description, duration, progress, status, priority, training_type, tags, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(TrainingId::new())
        .bind(input.title.trim())
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.progress)
        .bind(input.status)
        .bind(input.priority)
        .bind(input.training_type)
        .bind(&input.tags)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: TrainingId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM trainings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All trainings, newest first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM trainings ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Hours still to go, from duration and progress.
    pub fn remaining_hours(&self) -> f64 {
        let done = f64::from(self.progress.clamp(0, 100)) / 100.0;
        f64::from(self.duration) * (1.0 - done)
    }
}
