//! Pagination module
//!
//! Supports: Offset (page number), Cursor, Time window
//!
//! # Overview
//!
//! Each strategy turns a [`PageFetcher`] into a lazy, pull-based stream of
//! pages. Exactly one page is in flight per stream and nothing is fetched
//! until the consumer asks for it, so dropping a stream never wastes a
//! call. [`flatten_pages`] (or each paginator's `items()`) turns pages into
//! individual items.
//!
//! [`PageFetcher`]: crate::fetch::PageFetcher

mod flatten;
mod strategies;
mod types;

pub use flatten::flatten_pages;
pub use strategies::{
    oldest_item_boundary, CursorPaginator, OffsetPaginator, TimeWindowPaginator,
};
pub use types::{
    Cursor, CursorPage, CursorRequest, OffsetRequest, Page, PageContent, ResponseMetadata,
    TimeWindowRequest,
};

#[cfg(test)]
mod tests;
