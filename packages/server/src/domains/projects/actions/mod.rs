//! Project domain actions - business logic functions
//!
//! Writes go through the session guard; reads are open to any caller the
//! route layer lets through.

mod create_project;
mod queries;

pub use create_project::{create_project, create_project_guarded};
pub use queries::list_projects;
