// Think Flow - API Core
//
// Projects and trainings behind session-based access control.
// Writes go through the session guard in common::auth; the HTTP layer
// lives in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
