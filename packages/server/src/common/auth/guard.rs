//! Session guard for server actions.
//!
//! ```rust,ignore
//! let create = with_server_auth(|session: Session, input: CreateProjectInput| async move {
//!     insert_project(&session.user_id, input).await
//! });
//!
//! // Fails with GuardError::Unauthorized before the closure runs
//! // when `provider` has no live session.
//! let project = create.call(&provider, input).await?;
//! ```

use std::future::Future;
use thiserror::Error;
use tracing::warn;

use super::{AuthError, Session, SessionProvider};

/// Outcome of resolving the caller.
#[derive(Debug)]
pub enum Authorization {
    Authorized(Session),
    Denied(AuthError),
}

/// Resolve the current session. Missing and expired sessions are both denied
/// with `AuthError::Unauthorized`.
pub async fn authorize<P>(provider: &P) -> Authorization
where
    P: SessionProvider + ?Sized,
{
    match provider.current_session().await {
        Ok(Some(session)) if !session.is_expired() => Authorization::Authorized(session),
        Ok(_) => Authorization::Denied(AuthError::Unauthorized),
        Err(err) => Authorization::Denied(err),
    }
}

/// Error from a guarded call: either the caller was not let in, or the
/// action itself failed.
#[derive(Debug, Error)]
pub enum GuardError<E> {
    #[error("{0}")]
    Unauthorized(AuthError),

    #[error("{0}")]
    Operation(E),
}

impl<E> GuardError<E> {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GuardError::Unauthorized(_))
    }

    pub fn operation(self) -> Option<E> {
        match self {
            GuardError::Operation(err) => Some(err),
            GuardError::Unauthorized(_) => None,
        }
    }
}

/// An action that only runs for a signed-in caller.
#[derive(Clone)]
pub struct GuardedAction<F> {
    action: F,
}

/// Wrap `action(session, args)` so it can be called as `call(provider, args)`.
pub fn with_server_auth<F>(action: F) -> GuardedAction<F> {
    GuardedAction { action }
}

impl<F> GuardedAction<F> {
    pub async fn call<P, A, Fut, R, E>(&self, provider: &P, args: A) -> Result<R, GuardError<E>>
    where
        P: SessionProvider + ?Sized,
        F: Fn(Session, A) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        match authorize(provider).await {
            Authorization::Authorized(session) => {
                (self.action)(session, args).await.map_err(GuardError::Operation)
            }
            Authorization::Denied(err) => {
                warn!(error = %err, "Guarded action denied");
                Err(GuardError::Unauthorized(err))
            }
        }
    }
}
