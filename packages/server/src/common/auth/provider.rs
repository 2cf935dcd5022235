use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{AuthError, Session, SessionStore};

/// Source of the caller's session for one unit of work.
///
/// Passed explicitly to guarded actions instead of being read from ambient
/// request state.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;
}

/// Session provider for a single HTTP request.
///
/// Looks the token up at most once; later calls return the cached result.
pub struct RequestSession {
    token: Option<String>,
    store: Arc<dyn SessionStore>,
    resolved: OnceCell<Option<Session>>,
}

impl RequestSession {
    pub fn new(token: Option<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            token,
            store,
            resolved: OnceCell::new(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[async_trait]
impl SessionProvider for RequestSession {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let session = self
            .resolved
            .get_or_try_init(|| async {
                let Some(token) = self.token.as_deref() else {
                    debug!("No session token on request");
                    return Ok(None);
                };
                let session = self.store.find_by_token(token).await?;
                debug!(found = session.is_some(), "Resolved session token");
                Ok::<_, AuthError>(session)
            })
            .await?;

        Ok(session.clone())
    }
}

/// A session that has already been resolved (or is known to be absent).
#[derive(Clone, Debug, Default)]
pub struct ResolvedSession(pub Option<Session>);

impl ResolvedSession {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn signed_in(session: Session) -> Self {
        Self(Some(session))
    }
}

#[async_trait]
impl SessionProvider for ResolvedSession {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        session: Option<Session>,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl SessionStore for CountingStore {
        async fn find_by_token(&self, _token: &str) -> Result<Option<Session>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.session.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn find_by_token(&self, _token: &str) -> Result<Option<Session>> {
            Err(anyhow::anyhow!("session table unreachable"))
        }
    }

    #[tokio::test]
    async fn test_lookup_is_cached_per_request() {
        let session = Session::for_user("u1", chrono::Duration::hours(1));
        let store = Arc::new(CountingStore {
            session: Some(session.clone()),
            lookups: AtomicUsize::new(0),
        });
        let provider = RequestSession::new(Some("tok".into()), store.clone());

        assert_eq!(provider.current_session().await.unwrap(), Some(session.clone()));
        assert_eq!(provider.current_session().await.unwrap(), Some(session));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_token_skips_store() {
        let store = Arc::new(CountingStore {
            session: None,
            lookups: AtomicUsize::new(0),
        });
        let provider = RequestSession::new(None, store.clone());

        assert!(provider.current_session().await.unwrap().is_none());
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let provider = RequestSession::new(Some("tok".into()), Arc::new(FailingStore));
        let err = provider.current_session().await.unwrap_err();
        assert!(matches!(err, AuthError::InternalError(_)));
    }
}
