//! Batch fault isolation
//!
//! Submits a large batch through a [`BatchSubmitter`] and separates the
//! items that succeed from the ones that make any batch containing them
//! fail.
//!
//! ```text
//! [a b c d e f g h] fails
//!   [a b c d] ok      [e f g h] fails
//!                       [e f] ok   [g h] fails
//!                                    [g] ok  [h] isolated
//! ```
//!
//! [`BatchSubmitter`]: crate::fetch::BatchSubmitter

mod indicator;
mod isolator;
mod types;

pub use indicator::IndicatorQuery;
pub use isolator::BatchIsolator;
pub use types::{BatchOutcome, BatchStats, WorkItem};
