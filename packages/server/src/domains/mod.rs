// Feature domains: each owns its models, API data types and actions

pub mod projects;
pub mod trainings;
