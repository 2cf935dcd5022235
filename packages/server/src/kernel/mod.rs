//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PgProjectStore, PgTrainingStore, ServerDeps};
pub use test_dependencies::{MockProjectStore, MockTrainingStore, TestDependencies};
pub use traits::*;
