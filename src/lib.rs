// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Intelsync
//!
//! Traversal and bulk-lookup engines for threat-intelligence APIs.
//!
//! ## Features
//!
//! - **Offset Pagination**: Page number / page size with `hasNext` and `totalElements` support
//! - **Cursor Pagination**: Opaque continuation tokens threaded page to page
//! - **Time Window Pagination**: Backward-moving `[from, to]` windows with monotonicity checks
//! - **Batch Fault Isolation**: Recursive bisection to find the items that break a bulk call
//! - **Retry and Rate Limiting**: Decorators for any fetcher or submitter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use intelsync::pagination::{CursorPage, CursorPaginator, CursorRequest};
//!
//! #[tokio::main]
//! async fn main() -> intelsync::Result<()> {
//!     let fetcher = |request: CursorRequest| async move {
//!         // call the remote with request.cursor
//!         Ok(CursorPage::<String>::new(vec![], None))
//!     };
//!
//!     let paginator = CursorPaginator::new(fetcher).with_page_size(100);
//!     let reports: Vec<String> = paginator.items().try_collect().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Caller                               │
//! │      PageFetcher<R>                    BatchSubmitter<T>      │
//! └───────────────┬─────────────────────────────────┬─────────────┘
//!                 │                                 │
//! ┌───────────────┴──────────────┐  ┌───────────────┴─────────────┐
//! │          Pagination          │  │            Batch            │
//! ├──────────────────────────────┤  ├─────────────────────────────┤
//! │ Offset   Cursor   TimeWindow │  │ Dedup → Group → Chunk       │
//! │ flatten_pages → items        │  │ Bisect on failure           │
//! └───────────────┬──────────────┘  └───────────────┬─────────────┘
//!                 │                                 │
//! ┌───────────────┴─────────────────────────────────┴─────────────┐
//! │     Retrying   Throttled   RateLimiter   Observer             │
//! └───────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and timestamp helpers
pub mod types;

/// Engine configuration
pub mod config;

/// Engine event reporting
pub mod observe;

/// Collaborator traits, retry and rate limiting
pub mod fetch;

/// Pagination strategies
pub mod pagination;

/// Batch fault isolation
pub mod batch;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use batch::{BatchIsolator, BatchOutcome, IndicatorQuery, WorkItem};
pub use config::{BatchConfig, EngineConfig, PaginationConfig, RetryPolicy};
pub use fetch::{BatchSubmitter, PageFetcher, RateLimiter, RateLimiterConfig};
pub use observe::{EngineEvent, Observer, SharedObserver};
pub use pagination::{
    flatten_pages, CursorPaginator, OffsetPaginator, Page, TimeWindowPaginator,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
