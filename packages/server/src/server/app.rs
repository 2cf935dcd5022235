//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::{
    protected_routes_middleware, session_auth_middleware, SessionAuthState,
};
use crate::server::routes::{
    create_project_handler, create_training_handler, health_handler, list_projects_handler,
    list_trainings_handler, not_found_handler, session_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    /// None when running on in-memory stores
    pub db_pool: Option<PgPool>,
}

impl AppState {
    pub fn new(deps: ServerDeps, db_pool: Option<PgPool>) -> Self {
        Self {
            deps: Arc::new(deps),
            db_pool,
        }
    }
}

/// HTTP-level settings for [`build_app`]
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub allowed_origins: Vec<String>,
    pub cookie_prefix: String,
}

impl AppConfig {
    pub fn from_config(config: &crate::Config) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            cookie_prefix: config.session_cookie_prefix.clone(),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

/// Build the Axum application router
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let cookie_prefix: Arc<str> = Arc::from(config.cookie_prefix.as_str());
    let session_state = SessionAuthState {
        store: state.deps.sessions.clone(),
        cookie_prefix: cookie_prefix.clone(),
    };

    Router::new()
        .route(
            "/api/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route(
            "/api/trainings",
            get(list_trainings_handler).post(create_training_handler),
        )
        .route("/api/session", get(session_handler))
        .route("/health", get(health_handler))
        // Pages are served by the web front end
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn_with_state(
            session_state,
            session_auth_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            cookie_prefix,
            protected_routes_middleware,
        ))
        .layer(Extension(state))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
