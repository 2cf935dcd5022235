// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod types;
pub mod validation;

pub use auth::{
    with_server_auth, AuthError, Authorization, GuardError, GuardedAction, Session,
    SessionProvider, SessionStore,
};
pub use entity_ids::*;
pub use id::Id;
pub use validation::{decode_json, validate_form, FieldErrors};
pub use types::*;
