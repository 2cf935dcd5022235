//! Postgres-backed stores against a real database.

mod common;

use chrono::Duration;
use common::{create_test_session, create_test_user, unique_user_id, TestHarness};
use server_core::common::auth::{PgSessionStore, RequestSession, SessionStore};
use server_core::common::{Priority, WorkStatus};
use server_core::domains::projects::actions::{create_project_guarded, list_projects};
use server_core::domains::projects::{CreateProjectInput, Project};
use server_core::domains::trainings::actions::create_training_guarded;
use server_core::domains::trainings::{CreateTrainingInput, TrainingType};
use server_core::kernel::{BaseProjectStore, BaseTrainingStore, PgProjectStore, PgTrainingStore, ServerDeps};
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn project_insert_round_trips_enums(ctx: &TestHarness) {
    let store = PgProjectStore(ctx.db_pool.clone());
    let owner = unique_user_id();

    let mut input = CreateProjectInput::named("  Launch site  ");
    input.priority = Priority::High;
    input.status = WorkStatus::InProgress;
    input.estimated_time = 12;
    input.progress = 40;
    input.tags = Some("web, launch".to_string());

    let project = store.insert(&owner, &input).await.unwrap();

    assert_eq!(project.name, "Launch site");
    assert_eq!(project.owner_id, owner);
    assert_eq!(project.priority, Priority::High);
    assert_eq!(project.status, WorkStatus::InProgress);
    assert_eq!(project.tag_list(), vec!["web", "launch"]);

    let found = Project::find_by_id(project.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, project.id);

    let owned = Project::find_by_owner(&owner, &ctx.db_pool).await.unwrap();
    assert_eq!(owned.len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn projects_list_newest_first(ctx: &TestHarness) {
    let store = PgProjectStore(ctx.db_pool.clone());
    let owner = unique_user_id();

    let first = store
        .insert(&owner, &CreateProjectInput::named("first"))
        .await
        .unwrap();
    let second = store
        .insert(&owner, &CreateProjectInput::named("second"))
        .await
        .unwrap();

    let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();
    let first_pos = ids.iter().position(|id| *id == first.id).unwrap();
    let second_pos = ids.iter().position(|id| *id == second.id).unwrap();
    assert!(second_pos < first_pos);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn training_insert_keeps_type(ctx: &TestHarness) {
    let store = PgTrainingStore(ctx.db_pool.clone());
    let owner = unique_user_id();

    let mut input = CreateTrainingInput::new("Rust basics", 4);
    input.training_type = TrainingType::Workshop;

    let training = store.insert(&owner, &input).await.unwrap();

    assert_eq!(training.title, "Rust basics");
    assert_eq!(training.duration, 4);
    assert_eq!(training.training_type, TrainingType::Workshop);
    assert!(store
        .list()
        .await
        .unwrap()
        .iter()
        .any(|t| t.id == training.id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn session_store_joins_user(ctx: &TestHarness) {
    let user_id = unique_user_id();
    create_test_user(&ctx.db_pool, &user_id, "ada@example.com")
        .await
        .unwrap();
    let token = create_test_session(&ctx.db_pool, &user_id, Duration::hours(1))
        .await
        .unwrap();

    let store = PgSessionStore::new(ctx.db_pool.clone());
    let session = store.find_by_token(&token).await.unwrap().unwrap();

    assert_eq!(session.user_id, user_id);
    assert_eq!(session.email.as_deref(), Some("ada@example.com"));
    assert!(!session.is_expired());

    assert!(store.find_by_token("missing").await.unwrap().is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn guarded_create_against_postgres(ctx: &TestHarness) {
    let deps = ServerDeps::postgres(ctx.db_pool.clone());
    let user_id = unique_user_id();
    let token = create_test_session(&ctx.db_pool, &user_id, Duration::hours(1))
        .await
        .unwrap();

    let provider = RequestSession::new(Some(token), deps.sessions.clone());
    let project = create_project_guarded(&provider, CreateProjectInput::named("X"), &deps)
        .await
        .unwrap();
    assert_eq!(project.owner_id, user_id);

    let training = create_training_guarded(&provider, CreateTrainingInput::new("Y", 4), &deps)
        .await
        .unwrap();
    assert_eq!(training.owner_id, user_id);

    assert!(list_projects(&deps)
        .await
        .unwrap()
        .iter()
        .any(|p| p.id == project.id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn expired_session_cannot_create(ctx: &TestHarness) {
    let deps = ServerDeps::postgres(ctx.db_pool.clone());
    let user_id = unique_user_id();
    let token = create_test_session(&ctx.db_pool, &user_id, Duration::minutes(-1))
        .await
        .unwrap();

    let sessions: Arc<dyn SessionStore> = deps.sessions.clone();
    let provider = RequestSession::new(Some(token), sessions);
    let err = create_project_guarded(&provider, CreateProjectInput::named("X"), &deps)
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(Project::find_by_owner(&user_id, &ctx.db_pool)
        .await
        .unwrap()
        .is_empty());
}
