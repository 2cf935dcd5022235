// HTTP routes
pub mod health;
pub mod projects;
pub mod session;
pub mod trainings;

pub use health::*;
pub use projects::*;
pub use session::*;
pub use trainings::*;

use serde::{Deserialize, Serialize};

/// Success envelope: `{"data": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
