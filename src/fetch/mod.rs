//! Collaborator interfaces
//!
//! The engines never talk to the network themselves. They consume two
//! narrow capabilities supplied by the caller:
//!
//! - [`PageFetcher`] performs one remote call and returns one page
//! - [`BatchSubmitter`] performs one all-or-nothing bulk call
//!
//! Both are implemented for plain async closures, and can be wrapped in
//! [`Retrying`] (transient fault retries with backoff) and [`Throttled`]
//! (client-side token bucket) decorators.

mod decorators;
mod rate_limit;
mod traits;

pub use decorators::{Retrying, Throttled};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use traits::{BatchSubmitter, PageFetcher};
