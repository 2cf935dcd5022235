pub mod actions;
pub mod data;
pub mod errors;
pub mod models;

pub use data::ProjectData;
pub use errors::ProjectError;
pub use models::{CreateProjectInput, Project};
