mod project;

pub use project::ProjectData;
