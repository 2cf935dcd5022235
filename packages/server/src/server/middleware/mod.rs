// HTTP middleware
pub mod protected_routes;
pub mod session_auth;

pub use protected_routes::*;
pub use session_auth::*;
