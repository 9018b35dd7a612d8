//! Collaborator traits and their closure implementations

use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Performs one remote round trip for a page request.
///
/// Implementations should be idempotent for identical requests. Transient
/// infrastructure failures should be reported with a retryable [`Error`]
/// variant so decorators can tell them apart from fatal ones.
///
/// [`Error`]: crate::error::Error
#[async_trait]
pub trait PageFetcher<R>: Send + Sync
where
    R: Send + 'static,
{
    /// Page type returned by the remote
    type Page: Send;

    /// Fetch a single page
    async fn fetch_page(&self, request: R) -> Result<Self::Page>;
}

#[async_trait]
impl<R, P, F, Fut> PageFetcher<R> for F
where
    R: Send + 'static,
    P: Send,
    F: Fn(R) -> Fut + Send + Sync,
    Fut: Future<Output = Result<P>> + Send,
{
    type Page = P;

    async fn fetch_page(&self, request: R) -> Result<P> {
        (self)(request).await
    }
}

/// Submits a batch to an all-or-nothing bulk endpoint.
///
/// A failure carries no per-item detail. Content-caused failures should use
/// a non-retryable error; infrastructure failures a retryable one.
#[async_trait]
pub trait BatchSubmitter<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Per-item result type
    type Output: Send;

    /// Submit one batch
    async fn submit(&self, batch: &[T]) -> Result<Vec<Self::Output>>;
}

#[async_trait]
impl<T, O, F, Fut> BatchSubmitter<T> for F
where
    T: Clone + Send + Sync,
    O: Send,
    F: Fn(Vec<T>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<O>>> + Send,
{
    type Output = O;

    async fn submit(&self, batch: &[T]) -> Result<Vec<O>> {
        (self)(batch.to_vec()).await
    }
}
