use thiserror::Error;

/// Authorization errors.
///
/// `Unauthorized` is the only variant a caller should treat as "not signed
/// in"; the others mean the session could not be looked up at all.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AuthError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized => 401,
            AuthError::DatabaseError(_) | AuthError::InternalError(_) => 500,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::Unauthorized)
    }
}
