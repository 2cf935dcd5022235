//! Query descriptors: a cache key plus the fetch that fills it.

use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::Result;
use crate::types::{Project, Training};

pub const PROJECTS_KEY: &[&str] = &["projects"];
pub const TRAININGS_KEY: &[&str] = &["trainings"];

type QueryFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// A keyed read. Two descriptors with equal keys fetch the same data.
pub struct QueryDescriptor<T> {
    key: &'static [&'static str],
    query_fn: QueryFn<T>,
}

impl<T> Clone for QueryDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            query_fn: self.query_fn.clone(),
        }
    }
}

impl<T> fmt::Debug for QueryDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDescriptor")
            .field("key", &self.key)
            .finish()
    }
}

impl<T> QueryDescriptor<T> {
    pub fn new<F>(key: &'static [&'static str], query_fn: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<T>> + Send + Sync + 'static,
    {
        Self {
            key,
            query_fn: Arc::new(query_fn),
        }
    }

    pub fn key(&self) -> &'static [&'static str] {
        self.key
    }

    pub async fn fetch(&self) -> Result<T> {
        (self.query_fn)().await
    }
}

pub fn projects_query(client: ApiClient) -> QueryDescriptor<Vec<Project>> {
    QueryDescriptor::new(PROJECTS_KEY, move || {
        let client = client.clone();
        Box::pin(async move { client.fetch_projects().await })
    })
}

pub fn trainings_query(client: ApiClient) -> QueryDescriptor<Vec<Training>> {
    QueryDescriptor::new(TRAININGS_KEY, move || {
        let client = client.clone();
        Box::pin(async move { client.fetch_trainings().await })
    })
}
