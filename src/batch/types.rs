//! Batch isolation types

use std::fmt::Debug;
use std::hash::Hash;

/// An element of a batch submission.
///
/// `identity` is the value-equality key used for deduplication and must
/// include the grouping key. `group` selects the logical sub-batch: items
/// from different groups are never submitted together.
pub trait WorkItem {
    /// Deduplication key
    type Id: Eq + Hash + Clone + Debug + Send + Sync;
    /// Sub-batch key
    type Group: Eq + Clone + Debug + Send + Sync;

    /// Value-equality key
    fn identity(&self) -> Self::Id;

    /// Logical sub-batch this item belongs to
    fn group(&self) -> Self::Group;
}

/// Counters for one isolation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Submit calls made, retries included
    pub submissions: u64,
    /// Transient failures that were resubmitted unchanged
    pub retries: u64,
    /// Failing batches that were halved
    pub bisections: u64,
}

/// Result of isolating a batch.
///
/// `succeeded` and `isolated_failures` together hold every deduplicated
/// input item exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T, R> {
    /// Items whose batch eventually succeeded
    pub succeeded: Vec<T>,
    /// Per-item results from successful submissions, in submission order
    pub results: Vec<R>,
    /// Items that failed even when submitted alone
    pub isolated_failures: Vec<T>,
    /// Run counters
    pub stats: BatchStats,
}

impl<T, R> BatchOutcome<T, R> {
    /// An outcome with nothing in it
    pub fn empty() -> Self {
        Self {
            succeeded: Vec::new(),
            results: Vec::new(),
            isolated_failures: Vec::new(),
            stats: BatchStats::default(),
        }
    }

    /// Whether every item succeeded
    pub fn is_clean(&self) -> bool {
        self.isolated_failures.is_empty()
    }

    /// Number of distinct items accounted for
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.isolated_failures.len()
    }
}

impl<T, R> Default for BatchOutcome<T, R> {
    fn default() -> Self {
        Self::empty()
    }
}
