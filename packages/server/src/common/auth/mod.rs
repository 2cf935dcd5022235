/// Session-based access control.
///
/// Business functions take the caller's [`Session`] as their first argument
/// and are wrapped with [`with_server_auth`]; the session is resolved from an
/// explicitly passed [`SessionProvider`]:
///
/// ```rust,ignore
/// use crate::common::auth::{with_server_auth, RequestSession};
///
/// let provider = RequestSession::new(token, session_store);
/// let project = with_server_auth(|session, input| create_project(session, input, deps))
///     .call(&provider, input)
///     .await?;
/// ```
mod errors;
mod guard;
mod provider;
mod session;

pub use errors::AuthError;
pub use guard::{authorize, with_server_auth, Authorization, GuardError, GuardedAction};
pub use provider::{RequestSession, ResolvedSession, SessionProvider};
pub use session::{MemorySessionStore, PgSessionStore, Session, SessionStore, SessionToken};
