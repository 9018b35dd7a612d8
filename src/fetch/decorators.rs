//! Retry and rate-limit decorators for collaborators

use super::rate_limit::RateLimiter;
use super::traits::{BatchSubmitter, PageFetcher};
use crate::config::RetryPolicy;
use crate::error::Result;
use crate::observe::{default_observer, EngineEvent, SharedObserver};
use async_trait::async_trait;

// ============================================================================
// Retrying
// ============================================================================

/// Retries retryable fetch failures with backoff.
///
/// Fatal errors are returned immediately. When retries run out, the last
/// error is returned unchanged. Each retry is reported to the observer.
#[derive(Clone)]
pub struct Retrying<F> {
    inner: F,
    policy: RetryPolicy,
    observer: SharedObserver,
}

impl<F> Retrying<F> {
    /// Wrap a fetcher
    pub fn new(inner: F, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            observer: default_observer(),
        }
    }

    /// Set the observer
    #[must_use]
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Get the wrapped fetcher
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<R, F> PageFetcher<R> for Retrying<F>
where
    R: Clone + Send + Sync + 'static,
    F: PageFetcher<R>,
{
    type Page = F::Page;

    async fn fetch_page(&self, request: R) -> Result<Self::Page> {
        let mut attempt = 0;

        loop {
            match self.inner.fetch_page(request.clone()).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_retryable() && attempt < self.policy.max_retries => {
                    let delay = self.policy.delay_for(&e, attempt);
                    attempt += 1;
                    self.observer.on_event(&EngineEvent::FetchRetry {
                        attempt,
                        delay,
                        error: e.to_string(),
                    });
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// ============================================================================
// Throttled
// ============================================================================

/// Waits on a shared [`RateLimiter`] before every call
#[derive(Debug, Clone)]
pub struct Throttled<F> {
    inner: F,
    limiter: RateLimiter,
}

impl<F> Throttled<F> {
    /// Wrap a collaborator
    pub fn new(inner: F, limiter: RateLimiter) -> Self {
        Self { inner, limiter }
    }

    /// Get the wrapped collaborator
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<R, F> PageFetcher<R> for Throttled<F>
where
    R: Send + 'static,
    F: PageFetcher<R>,
{
    type Page = F::Page;

    async fn fetch_page(&self, request: R) -> Result<Self::Page> {
        self.limiter.wait().await;
        self.inner.fetch_page(request).await
    }
}

#[async_trait]
impl<T, F> BatchSubmitter<T> for Throttled<F>
where
    T: Send + Sync,
    F: BatchSubmitter<T>,
{
    type Output = F::Output;

    async fn submit(&self, batch: &[T]) -> Result<Vec<Self::Output>> {
        self.limiter.wait().await;
        self.inner.submit(batch).await
    }
}
