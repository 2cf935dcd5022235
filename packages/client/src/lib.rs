//! Client side of Think Flow.
//!
//! [`ActionHook`] tracks the state of an async mutation, [`ApiClient`] talks
//! to the HTTP API through the [`fetcher`] crate, and the query descriptors
//! in [`query`] give each read a stable cache key.

pub mod action;
pub mod api;
pub mod error;
pub mod query;
pub mod types;

pub use action::{ActionHook, ActionSnapshot, ActionState, DEFAULT_ERROR_MESSAGE};
pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use query::{projects_query, trainings_query, QueryDescriptor};
pub use types::*;
