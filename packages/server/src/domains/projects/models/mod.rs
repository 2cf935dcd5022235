pub mod project;

pub use project::{CreateProjectInput, Project, PROJECT_NAME_MAX_LEN};
