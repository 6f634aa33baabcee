use async_trait::async_trait;
use std::future::Future;

use crate::error::FetchError;

/// Producer of a complete record set.
///
/// Futures are not required to be `Send` so browser HTTP clients can
/// implement this directly.
#[async_trait(?Send)]
pub trait RecordSource<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError>;
}

/// Fixed in-memory record set, for screens backed by mock data
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSource<T> {
    records: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[async_trait(?Send)]
impl<T: Clone> RecordSource<T> for StaticSource<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        Ok(self.records.clone())
    }
}

/// Record source backed by a closure returning a future
pub struct FnSource<F> {
    fetch: F,
}

/// Wrap an async closure as a [`RecordSource`].
///
/// The returned futures must own their data (`'static`); clone handles into
/// the closure body rather than borrowing them.
pub fn source_fn<F, Fut, T, E>(fetch: F) -> FnSource<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>> + 'static,
    T: 'static,
    E: Into<FetchError> + 'static,
{
    FnSource { fetch }
}

#[async_trait(?Send)]
impl<F, Fut, T, E> RecordSource<T> for FnSource<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>> + 'static,
    T: 'static,
    E: Into<FetchError> + 'static,
{
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        (self.fetch)().await.map_err(Into::into)
    }
}
