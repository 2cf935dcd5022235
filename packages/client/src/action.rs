//! State tracking for a single async mutation.
//!
//! ```rust,ignore
//! let create = ActionHook::new(move |input: NewProject| {
//!     let api = api.clone();
//!     async move { api.create_project(&input).await }
//! })
//! .on_success(|project| info!(id = %project.id, "created"));
//!
//! create.execute(NewProject::named("X")).await?;
//! assert!(create.snapshot().await.data.is_some());
//! ```
//!
//! Every `execute` takes a ticket. Only the call holding the latest ticket
//! writes the final state and fires callbacks; a superseded call still
//! returns its own result to its own caller.

use futures::future::BoxFuture;
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Stored when an error renders as an empty string
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

type ActionFn<I, R, E> = Arc<dyn Fn(I) -> BoxFuture<'static, Result<R, E>> + Send + Sync>;
type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<R> {
    Idle,
    Loading,
    Succeeded(R),
    Failed(String),
}

/// Flattened view of [`ActionState`]
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSnapshot<R> {
    pub loading: bool,
    pub data: Option<R>,
    pub error: Option<String>,
}

impl<R: Clone> From<&ActionState<R>> for ActionSnapshot<R> {
    fn from(state: &ActionState<R>) -> Self {
        match state {
            ActionState::Idle => Self {
                loading: false,
                data: None,
                error: None,
            },
            ActionState::Loading => Self {
                loading: true,
                data: None,
                error: None,
            },
            ActionState::Succeeded(data) => Self {
                loading: false,
                data: Some(data.clone()),
                error: None,
            },
            ActionState::Failed(message) => Self {
                loading: false,
                data: None,
                error: Some(message.clone()),
            },
        }
    }
}

pub struct ActionHook<I, R, E> {
    action: ActionFn<I, R, E>,
    state: Arc<RwLock<ActionState<R>>>,
    latest: Arc<AtomicU64>,
    on_success: Option<Callback<R>>,
    on_error: Option<Callback<E>>,
}

impl<I, R, E> Clone for ActionHook<I, R, E> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            state: self.state.clone(),
            latest: self.latest.clone(),
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<I, R, E> ActionHook<I, R, E>
where
    I: Send + 'static,
    R: Clone + Send + Sync + 'static,
    E: Display + Send + 'static,
{
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
    {
        Self {
            action: Arc::new(move |input| Box::pin(action(input))),
            state: Arc::new(RwLock::new(ActionState::Idle)),
            latest: Arc::new(AtomicU64::new(0)),
            on_success: None,
            on_error: None,
        }
    }

    pub fn on_success(mut self, callback: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&E) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Run the action. The result is always returned, whether or not this
    /// call was superseded while it ran.
    pub async fn execute(&self, input: I) -> Result<R, E> {
        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ActionState::Loading;
            ticket
        };

        let result = (self.action)(input).await;

        let mut state = self.state.write().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Superseded action settled, state left alone");
            return result;
        }

        match &result {
            Ok(data) => {
                *state = ActionState::Succeeded(data.clone());
                drop(state);
                if let Some(callback) = &self.on_success {
                    callback(data);
                }
            }
            Err(err) => {
                *state = ActionState::Failed(error_message(err));
                drop(state);
                if let Some(callback) = &self.on_error {
                    callback(err);
                }
            }
        }

        result
    }

    pub async fn state(&self) -> ActionState<R> {
        self.state.read().await.clone()
    }

    pub async fn snapshot(&self) -> ActionSnapshot<R> {
        ActionSnapshot::from(&*self.state.read().await)
    }

    /// Back to `Idle`. In-flight calls no longer count as latest.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        self.latest.fetch_add(1, Ordering::SeqCst);
        *state = ActionState::Idle;
    }
}

fn error_message<E: Display>(err: &E) -> String {
    let message = err.to_string();
    if message.is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
