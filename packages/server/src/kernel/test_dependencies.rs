// TestDependencies - mock implementations for testing
//
// In-memory stores that record every insert, so tests can assert what the
// domain actions did (or did not) write.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use super::{BaseProjectStore, BaseTrainingStore, ServerDeps};
use crate::common::auth::{MemorySessionStore, Session};
use crate::common::{ProjectId, TrainingId};
use crate::domains::projects::models::{CreateProjectInput, Project};
use crate::domains::trainings::models::{CreateTrainingInput, Training};

// =============================================================================
// Mock Project Store
// =============================================================================

/// Arguments captured from an insert call
#[derive(Debug, Clone)]
pub struct InsertCall<I> {
    pub owner_id: String,
    pub input: I,
}

pub struct MockProjectStore {
    rows: Arc<Mutex<Vec<Project>>>,
    insert_calls: Arc<Mutex<Vec<InsertCall<CreateProjectInput>>>>,
    failure: Option<String>,
}

impl MockProjectStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            insert_calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn insert_calls(&self) -> Vec<InsertCall<CreateProjectInput>> {
        self.insert_calls.lock().unwrap().clone()
    }

    pub fn was_inserted(&self) -> bool {
        !self.insert_calls.lock().unwrap().is_empty()
    }
}

impl Default for MockProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseProjectStore for MockProjectStore {
    async fn insert(&self, owner_id: &str, input: &CreateProjectInput) -> Result<Project> {
        self.insert_calls.lock().unwrap().push(InsertCall {
            owner_id: owner_id.to_string(),
            input: input.clone(),
        });

        if let Some(message) = &self.failure {
            return Err(anyhow::anyhow!("{}", message));
        }

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            name: input.name.trim().to_string(),
            description: input.description.clone(),
            priority: input.priority,
            status: input.status,
            estimated_time: input.estimated_time,
            progress: input.progress,
            tags: input.tags.clone(),
            owner_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        if let Some(message) = &self.failure {
            return Err(anyhow::anyhow!("{}", message));
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }
}

// =============================================================================
// Mock Training Store
// =============================================================================

pub struct MockTrainingStore {
    rows: Arc<Mutex<Vec<Training>>>,
    insert_calls: Arc<Mutex<Vec<InsertCall<CreateTrainingInput>>>>,
    failure: Option<String>,
}

impl MockTrainingStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            insert_calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn insert_calls(&self) -> Vec<InsertCall<CreateTrainingInput>> {
        self.insert_calls.lock().unwrap().clone()
    }

    pub fn was_inserted(&self) -> bool {
        !self.insert_calls.lock().unwrap().is_empty()
    }
}

impl Default for MockTrainingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseTrainingStore for MockTrainingStore {
    async fn insert(&self, owner_id: &str, input: &CreateTrainingInput) -> Result<Training> {
        self.insert_calls.lock().unwrap().push(InsertCall {
            owner_id: owner_id.to_string(),
            input: input.clone(),
        });

        if let Some(message) = &self.failure {
            return Err(anyhow::anyhow!("{}", message));
        }

        let now = Utc::now();
        let training = Training {
            id: TrainingId::new(),
            title: input.title.trim().to_string(),
            description: input.description.clone(),
            duration: input.duration,
            progress: input.progress,
            status: input.status,
            priority: input.priority,
            training_type: input.training_type,
            tags: input.tags.clone(),
            owner_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(training.clone());
        Ok(training)
    }

    async fn list(&self) -> Result<Vec<Training>> {
        if let Some(message) = &self.failure {
            return Err(anyhow::anyhow!("{}", message));
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub projects: Arc<MockProjectStore>,
    pub trainings: Arc<MockTrainingStore>,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(MockProjectStore::new()),
            trainings: Arc::new(MockTrainingStore::new()),
            sessions: Arc::new(MemorySessionStore::new()),
        }
    }

    pub fn mock_projects(mut self, store: MockProjectStore) -> Self {
        self.projects = Arc::new(store);
        self
    }

    pub fn mock_trainings(mut self, store: MockTrainingStore) -> Self {
        self.trainings = Arc::new(store);
        self
    }

    /// Register a live session for `user_id` and return its token
    pub async fn sign_in(&self, user_id: &str) -> String {
        self.sessions
            .insert(Session::for_user(user_id, chrono::Duration::hours(24)))
            .await
    }

    /// ServerDeps sharing these mocks (the mocks stay inspectable)
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.projects.clone(),
            self.trainings.clone(),
            self.sessions.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
