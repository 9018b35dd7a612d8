//! Observability sink injected into each engine
//!
//! Engines never log through ambient globals of their own; they report
//! [`EngineEvent`]s to an [`Observer`] handed to them at construction.
//! [`TracingObserver`] forwards events to `tracing` and is the default.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pagination strategy that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Page number / page size
    Offset,
    /// Opaque continuation token
    Cursor,
    /// Backward-moving time window
    TimeWindow,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset => write!(f, "offset"),
            Self::Cursor => write!(f, "cursor"),
            Self::TimeWindow => write!(f, "time_window"),
        }
    }
}

/// Something that happened inside an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A page was fetched and is about to be emitted
    PageFetched {
        /// Strategy in use
        strategy: Strategy,
        /// Zero-based index of the page within this sequence
        index: usize,
        /// Number of items on the page
        items: usize,
    },
    /// The sequence ended normally
    Exhausted {
        /// Strategy in use
        strategy: Strategy,
        /// Pages emitted in total
        pages: usize,
    },
    /// The sequence ended with an error
    Aborted {
        /// Strategy in use
        strategy: Strategy,
        /// Pages emitted before the error
        pages: usize,
        /// Rendered error
        error: String,
    },
    /// A page fetch failed transiently and will be retried
    FetchRetry {
        /// Retry attempt (1-based)
        attempt: u32,
        /// Delay before retrying
        delay: Duration,
        /// Rendered error
        error: String,
    },
    /// A batch was submitted
    BatchSubmitted {
        /// Items in the batch
        size: usize,
        /// Whether the call succeeded
        succeeded: bool,
    },
    /// A batch failed transiently and will be resubmitted unchanged
    BatchRetry {
        /// Items in the batch
        size: usize,
        /// Retry attempt (1-based)
        attempt: u32,
        /// Delay before resubmitting
        delay: Duration,
    },
    /// A failing batch was halved
    BatchSplit {
        /// Items in the failing batch
        size: usize,
    },
    /// A single item was proven to fail on its own
    ItemIsolated {
        /// Debug rendering of the item identity
        identity: String,
    },
    /// Isolation completed
    IsolationFinished {
        /// Items that succeeded
        succeeded: usize,
        /// Items isolated as failures
        isolated: usize,
        /// Submit calls made
        submissions: u64,
    },
}

/// Receives engine events
pub trait Observer: Send + Sync {
    /// Handle one event
    fn on_event(&self, event: &EngineEvent);
}

/// Shared observer handle
pub type SharedObserver = Arc<dyn Observer>;

/// Default observer handle used by engines
pub fn default_observer() -> SharedObserver {
    Arc::new(TracingObserver)
}

// ============================================================================
// Tracing Observer
// ============================================================================

/// Forwards events to the `tracing` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &EngineEvent) {
        match event {
            EngineEvent::PageFetched {
                strategy,
                index,
                items,
            } => debug!(%strategy, page = index, items, "Fetched page"),
            EngineEvent::Exhausted { strategy, pages } => {
                debug!(%strategy, pages, "Pagination exhausted");
            }
            EngineEvent::Aborted {
                strategy,
                pages,
                error,
            } => warn!(%strategy, pages, %error, "Pagination aborted"),
            EngineEvent::FetchRetry {
                attempt,
                delay,
                error,
            } => warn!(attempt, ?delay, %error, "Page fetch failed transiently, retrying"),
            EngineEvent::BatchSubmitted { size, succeeded } => {
                debug!(size, succeeded, "Submitted batch");
            }
            EngineEvent::BatchRetry {
                size,
                attempt,
                delay,
            } => warn!(
                size,
                attempt,
                ?delay,
                "Batch failed transiently, retrying unchanged"
            ),
            EngineEvent::BatchSplit { size } => debug!(size, "Bisecting failed batch"),
            EngineEvent::ItemIsolated { identity } => {
                warn!(%identity, "Isolated item that fails on its own");
            }
            EngineEvent::IsolationFinished {
                succeeded,
                isolated,
                submissions,
            } => info!(succeeded, isolated, submissions, "Batch isolation finished"),
        }
    }
}

// ============================================================================
// Noop Observer
// ============================================================================

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_event(&self, _event: &EngineEvent) {}
}

// ============================================================================
// Stats Observer
// ============================================================================

/// Counters snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Pages fetched
    pub pages: u64,
    /// Items across fetched pages
    pub items: u64,
    /// Sequences that ended with an error
    pub aborted: u64,
    /// Batch submissions
    pub submissions: u64,
    /// Transient fetch and batch retries
    pub retries: u64,
    /// Batch bisections
    pub splits: u64,
    /// Items isolated
    pub isolated: u64,
}

/// Counts events with atomics so it can be shared across engines
#[derive(Debug, Default)]
pub struct StatsObserver {
    pages: AtomicU64,
    items: AtomicU64,
    aborted: AtomicU64,
    submissions: AtomicU64,
    retries: AtomicU64,
    splits: AtomicU64,
    isolated: AtomicU64,
}

impl StatsObserver {
    /// Create a zeroed observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current counters
    pub fn snapshot(&self) -> EngineStats {
        EngineStats {
            pages: self.pages.load(Ordering::Relaxed),
            items: self.items.load(Ordering::Relaxed),
            aborted: self.aborted.load(Ordering::Relaxed),
            submissions: self.submissions.load(Ordering::Relaxed),
            retries: self.retries.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            isolated: self.isolated.load(Ordering::Relaxed),
        }
    }
}

impl Observer for StatsObserver {
    fn on_event(&self, event: &EngineEvent) {
        match event {
            EngineEvent::PageFetched { items, .. } => {
                self.pages.fetch_add(1, Ordering::Relaxed);
                self.items.fetch_add(*items as u64, Ordering::Relaxed);
            }
            EngineEvent::Aborted { .. } => {
                self.aborted.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::BatchSubmitted { .. } => {
                self.submissions.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::FetchRetry { .. } | EngineEvent::BatchRetry { .. } => {
                self.retries.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::BatchSplit { .. } => {
                self.splits.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::ItemIsolated { .. } => {
                self.isolated.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::Exhausted { .. } | EngineEvent::IsolationFinished { .. } => {}
        }
    }
}
