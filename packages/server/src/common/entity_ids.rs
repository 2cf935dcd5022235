//! Typed ids for the Think Flow entities.

pub use super::id::Id;

/// Marker for project rows.
pub struct Project;

/// Marker for training rows.
pub struct Training;

pub type ProjectId = Id<Project>;
pub type TrainingId = Id<Training>;
