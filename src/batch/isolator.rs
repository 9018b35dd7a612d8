//! Recursive bisection over failing batches
//!
//! A batch that fails for content reasons is split in half and each half is
//! resubmitted, until every bad item has been submitted alone. Transient
//! failures are retried unchanged so an outage does not get mistaken for a
//! bad item.

use super::types::{BatchOutcome, BatchStats, WorkItem};
use crate::config::{BatchConfig, RetryPolicy};
use crate::error::{Error, Result};
use crate::fetch::BatchSubmitter;
use crate::observe::{default_observer, EngineEvent, SharedObserver};
use std::collections::HashSet;

/// Splits a heterogeneous batch into good items and individually bad ones
pub struct BatchIsolator {
    max_batch_size: usize,
    retry: RetryPolicy,
    observer: SharedObserver,
}

impl BatchIsolator {
    /// Create an isolator that submits at most `max_batch_size` items per call
    pub fn new(max_batch_size: usize) -> Self {
        Self {
            max_batch_size,
            retry: RetryPolicy::default(),
            observer: default_observer(),
        }
    }

    /// Create an isolator from config
    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.max_batch_size).with_retry_policy(config.retry.clone())
    }

    /// Set the policy for transient failures
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the observer
    #[must_use]
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Maximum items per submission
    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Submit `items` and isolate the ones that cannot succeed.
    ///
    /// Only a zero `max_batch_size` is an error; submission failures end up
    /// in [`BatchOutcome::isolated_failures`].
    pub async fn isolate<T, S>(
        &self,
        items: Vec<T>,
        submitter: &S,
    ) -> Result<BatchOutcome<T, S::Output>>
    where
        T: WorkItem + Send + Sync,
        S: BatchSubmitter<T>,
    {
        if self.max_batch_size == 0 {
            return Err(Error::invalid_value("max_batch_size", "must be at least 1"));
        }

        let mut outcome = BatchOutcome::empty();
        if items.is_empty() {
            return Ok(outcome);
        }

        // popped from the back, so keep the first chunk last
        let mut stack = self.initial_chunks(items);
        stack.reverse();

        while let Some(mut chunk) = stack.pop() {
            match self.submit(&chunk, submitter, &mut outcome.stats).await {
                Ok(results) => {
                    outcome.succeeded.append(&mut chunk);
                    outcome.results.extend(results);
                }
                Err(_) if chunk.len() == 1 => {
                    let item = chunk.remove(0);
                    self.observer.on_event(&EngineEvent::ItemIsolated {
                        identity: format!("{:?}", item.identity()),
                    });
                    outcome.isolated_failures.push(item);
                }
                Err(_) => {
                    outcome.stats.bisections += 1;
                    self.observer
                        .on_event(&EngineEvent::BatchSplit { size: chunk.len() });
                    let second = chunk.split_off(chunk.len() / 2);
                    stack.push(second);
                    stack.push(chunk);
                }
            }
        }

        self.observer.on_event(&EngineEvent::IsolationFinished {
            succeeded: outcome.succeeded.len(),
            isolated: outcome.isolated_failures.len(),
            submissions: outcome.stats.submissions,
        });

        Ok(outcome)
    }

    /// Deduplicate, group and chunk the input, preserving first-seen order
    fn initial_chunks<T: WorkItem>(&self, items: Vec<T>) -> Vec<Vec<T>> {
        let mut seen = HashSet::new();
        let mut groups: Vec<(T::Group, Vec<T>)> = Vec::new();

        for item in items {
            if !seen.insert(item.identity()) {
                continue;
            }
            let group = item.group();
            match groups.iter_mut().find(|(key, _)| *key == group) {
                Some((_, members)) => members.push(item),
                None => groups.push((group, vec![item])),
            }
        }

        let mut chunks = Vec::new();
        for (_, mut members) in groups {
            while members.len() > self.max_batch_size {
                let rest = members.split_off(self.max_batch_size);
                chunks.push(members);
                members = rest;
            }
            chunks.push(members);
        }
        chunks
    }

    /// One logical submission, retrying transient failures unchanged
    async fn submit<T, S>(
        &self,
        chunk: &[T],
        submitter: &S,
        stats: &mut BatchStats,
    ) -> Result<Vec<S::Output>>
    where
        T: Send + Sync,
        S: BatchSubmitter<T>,
    {
        let mut attempt = 0;

        loop {
            stats.submissions += 1;
            let result = submitter.submit(chunk).await;
            self.observer.on_event(&EngineEvent::BatchSubmitted {
                size: chunk.len(),
                succeeded: result.is_ok(),
            });

            match result {
                Err(e) if e.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(&e, attempt);
                    attempt += 1;
                    stats.retries += 1;
                    self.observer.on_event(&EngineEvent::BatchRetry {
                        size: chunk.len(),
                        attempt,
                        delay,
                    });
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}
