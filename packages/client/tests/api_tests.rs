//! ApiClient and ActionHook against a local axum server.

use axum::{
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use client::{
    projects_query, trainings_query, ActionHook, ActionState, ApiClient, ClientError, NewProject,
    NewTraining, Priority, TrainingType,
};
use fetcher::Fetcher;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const TOKEN: &str = "tok-u1";

fn project_json(name: &str) -> Value {
    json!({
        "id": "p1",
        "name": name,
        "description": null,
        "priority": "high",
        "status": "pending",
        "estimatedTime": 0,
        "progress": 0,
        "tags": null,
        "createdAt": "2024-01-01T00:00:00+00:00",
        "updatedAt": "2024-01-01T00:00:00+00:00"
    })
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn create_project(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !signed_in(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }
    let name = body["name"].as_str().unwrap_or_default();
    (StatusCode::CREATED, Json(json!({ "data": project_json(name) })))
}

async fn create_training(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !signed_in(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "data": {
            "id": "t1",
            "title": body["title"],
            "description": null,
            "duration": body["duration"],
            "progress": 0,
            "status": "pending",
            "priority": "medium",
            "type": body["type"],
            "tags": null,
            "createdAt": "2024-01-01T00:00:00+00:00",
            "updatedAt": "2024-01-01T00:00:00+00:00"
        }})),
    )
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route(
            "/api/projects",
            get(|| async { Json(json!({ "data": [project_json("X")] })) }).post(create_project),
        )
        .route(
            "/api/trainings",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }).post(create_training),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_projects_decodes_envelope() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await));

    let projects = api.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "X");
    assert_eq!(projects[0].priority, Priority::High);
}

#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await));

    let err = api.create_project(&NewProject::named("X")).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn create_with_token_returns_created_row() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await)).with_token(TOKEN);

    let project = api.create_project(&NewProject::named("X")).await.unwrap();
    assert_eq!(project.name, "X");

    let mut input = NewTraining::new("Y", 4);
    input.training_type = TrainingType::Bootcamp;
    let training = api.create_training(&input).await.unwrap();
    assert_eq!(training.title, "Y");
    assert_eq!(training.duration, 4);
    assert_eq!(training.training_type, TrainingType::Bootcamp);
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await));

    let err = api.fetch_trainings().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("db down"));
}

#[tokio::test]
async fn queries_fetch_through_the_client() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await));

    let projects = projects_query(api.clone());
    assert_eq!(projects.key(), &["projects"]);
    assert_eq!(projects.fetch().await.unwrap()[0].name, "X");

    let trainings = trainings_query(api);
    assert!(matches!(trainings.fetch().await, Err(ClientError::Fetch(_))));
}

#[tokio::test]
async fn action_hook_tracks_api_mutation() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await)).with_token(TOKEN);
    let create = ActionHook::new(move |input: NewProject| {
        let api = api.clone();
        async move { api.create_project(&input).await }
    });

    let project = create.execute(NewProject::named("X")).await.unwrap();

    assert_eq!(create.state().await, ActionState::Succeeded(project));
}

#[tokio::test]
async fn action_hook_keeps_failure_message() {
    let api = ApiClient::new(Fetcher::new(spawn_server().await));
    let create = ActionHook::new(move |input: NewProject| {
        let api = api.clone();
        async move { api.create_project(&input).await }
    });

    assert!(create.execute(NewProject::named("X")).await.is_err());

    let snapshot = create.snapshot().await;
    assert!(!snapshot.loading);
    assert!(snapshot.error.unwrap().contains("401"));
}
