//! Pagination types
//!
//! Request values handed to a [`PageFetcher`] and the page envelopes it
//! returns. Page envelopes deserialize directly from the remote's JSON.
//!
//! [`PageFetcher`]: crate::fetch::PageFetcher

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Requests
// ============================================================================

/// Parameters for one offset-paginated call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetRequest {
    /// Page number to fetch
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
}

/// Parameters for one cursor-paginated call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorRequest {
    /// Continuation token; `None` requests the start of the collection
    pub cursor: Option<Cursor>,
    /// Optional page size, passed through as-is
    pub page_size: Option<u32>,
}

/// Parameters for one time-window call, `[from_time, to_time]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindowRequest {
    /// Lower bound (milliseconds since epoch)
    pub from_time: Timestamp,
    /// Upper bound (milliseconds since epoch)
    pub to_time: Timestamp,
}

// ============================================================================
// Cursor
// ============================================================================

/// Opaque continuation token issued by the remote.
///
/// Only ever compared against empty; never parsed or altered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token
    pub fn into_inner(self) -> String {
        self.0
    }

    /// An empty token signals exhaustion
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Page Content
// ============================================================================

/// Anything that carries an ordered list of items
pub trait PageContent {
    /// Item type
    type Item;

    /// Borrow the items
    fn items(&self) -> &[Self::Item];

    /// Take the items
    fn into_items(self) -> Vec<Self::Item>;

    /// Number of items on the page
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the page has no items
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

// ============================================================================
// Page
// ============================================================================

/// A page from an offset or time-window paginated endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in remote order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Zero-based page number reported by the remote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Page size reported by the remote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Size of the whole collection, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    /// Explicit continuation flag, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
}

impl<T> Page<T> {
    /// Create a page holding only items
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            page_number: None,
            page_size: None,
            total_elements: None,
            has_next: None,
        }
    }

    /// Set the explicit continuation flag
    #[must_use]
    pub fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = Some(has_next);
        self
    }

    /// Set the collection size
    #[must_use]
    pub fn with_total_elements(mut self, total: u64) -> Self {
        self.total_elements = Some(total);
        self
    }

    /// Decide whether another page follows this one.
    ///
    /// An empty page always ends the collection. Otherwise an explicit
    /// `has_next` wins, then `total_elements` (assuming zero-based page
    /// numbers), then a short page ends it.
    pub fn has_more_pages(&self, page_number: u32, page_size: u32) -> bool {
        if self.items.is_empty() {
            return false;
        }

        if let Some(has_next) = self.has_next {
            return has_next;
        }

        if let Some(total) = self.total_elements {
            let covered = (u64::from(page_number) + 1) * u64::from(page_size);
            return covered < total;
        }

        self.items.len() >= page_size as usize
    }
}

impl<T> PageContent for Page<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

// ============================================================================
// Cursor Page
// ============================================================================

/// Continuation data attached to a cursor page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// Token for the next page
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
}

/// A page from a cursor paginated endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    /// Items in remote order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Continuation metadata
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

impl<T> CursorPage<T> {
    /// Create a cursor page
    pub fn new(items: Vec<T>, next_cursor: Option<Cursor>) -> Self {
        Self {
            items,
            response_metadata: ResponseMetadata { next_cursor },
        }
    }

    /// The next token, if one was issued and is non-empty
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.response_metadata
            .next_cursor
            .as_ref()
            .filter(|cursor| !cursor.is_empty())
    }
}

impl<T> PageContent for CursorPage<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
