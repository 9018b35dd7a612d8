//! Pagination strategy implementations
//!
//! Each paginator holds only immutable configuration. Calling `pages()`
//! builds a fresh lazy stream from the configured starting point, so a
//! sequence can always be restarted from the beginning but never resumed
//! from the middle. Every poll that needs a page performs exactly one
//! fetch; nothing is prefetched.

use super::flatten::flatten_pages;
use super::types::{
    Cursor, CursorPage, CursorRequest, OffsetRequest, Page, PageContent, TimeWindowRequest,
};
use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::observe::{default_observer, EngineEvent, SharedObserver, Strategy};
use crate::types::{now_millis, Timestamp, DAY_MILLIS};
use futures::stream::{self, Stream};

/// Report the end of a sequence
fn report_exhausted(observer: &SharedObserver, strategy: Strategy, pages: usize) {
    observer.on_event(&EngineEvent::Exhausted { strategy, pages });
}

/// Report an error that ends a sequence and hand it back
fn report_abort(
    observer: &SharedObserver,
    strategy: Strategy,
    pages: usize,
    error: Error,
) -> Error {
    observer.on_event(&EngineEvent::Aborted {
        strategy,
        pages,
        error: error.to_string(),
    });
    error
}

fn report_page(observer: &SharedObserver, strategy: Strategy, index: usize, items: usize) {
    observer.on_event(&EngineEvent::PageFetched {
        strategy,
        index,
        items,
    });
}

// ============================================================================
// Offset Pagination
// ============================================================================

/// Page number / page size pagination
///
/// Requests `start_page`, `start_page + 1`, ... until a page signals the end
/// of the collection (see [`Page::has_more_pages`]).
pub struct OffsetPaginator<F> {
    fetcher: F,
    start_page: u32,
    page_size: u32,
    observer: SharedObserver,
}

struct OffsetState {
    pending: Option<OffsetRequest>,
    emitted: usize,
}

impl<F> OffsetPaginator<F> {
    /// Create a new offset paginator
    pub fn new(fetcher: F, start_page: u32, page_size: u32) -> Self {
        Self {
            fetcher,
            start_page,
            page_size,
            observer: default_observer(),
        }
    }

    /// Create an offset paginator from config defaults
    pub fn from_config(fetcher: F, config: &PaginationConfig) -> Self {
        Self::new(fetcher, config.start_page, config.page_size)
    }

    /// Set the observer
    #[must_use]
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Lazy stream of pages
    pub fn pages<'a, T>(&'a self) -> impl Stream<Item = Result<Page<T>>> + Send + 'a
    where
        F: PageFetcher<OffsetRequest, Page = Page<T>>,
        T: Send + 'a,
    {
        let state = OffsetState {
            pending: Some(OffsetRequest {
                page_number: self.start_page,
                page_size: self.page_size,
            }),
            emitted: 0,
        };

        stream::try_unfold(state, move |state| self.advance(state))
    }

    async fn advance<T>(&self, state: OffsetState) -> Result<Option<(Page<T>, OffsetState)>>
    where
        F: PageFetcher<OffsetRequest, Page = Page<T>>,
    {
        let Some(request) = state.pending else {
            report_exhausted(&self.observer, Strategy::Offset, state.emitted);
            return Ok(None);
        };

        if request.page_size == 0 {
            return Err(report_abort(
                &self.observer,
                Strategy::Offset,
                state.emitted,
                Error::invalid_value("page_size", "must be at least 1"),
            ));
        }

        let page = self
            .fetcher
            .fetch_page(request)
            .await
            .map_err(|e| report_abort(&self.observer, Strategy::Offset, state.emitted, e))?;
        report_page(&self.observer, Strategy::Offset, state.emitted, page.len());

        // the last addressable page number ends the sequence
        let pending = page
            .has_more_pages(request.page_number, request.page_size)
            .then(|| request.page_number.checked_add(1))
            .flatten()
            .map(|page_number| OffsetRequest {
                page_number,
                ..request
            });

        Ok(Some((
            page,
            OffsetState {
                pending,
                emitted: state.emitted + 1,
            },
        )))
    }

    /// Lazy stream of items across all pages
    pub fn items<'a, T>(&'a self) -> impl Stream<Item = Result<T>> + Send + 'a
    where
        F: PageFetcher<OffsetRequest, Page = Page<T>>,
        T: Send + 'a,
    {
        flatten_pages(self.pages())
    }
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor based pagination
///
/// Threads the remote's `next_cursor` from one page into the next request.
/// Stops on a missing or empty cursor, or on an empty page.
pub struct CursorPaginator<F> {
    fetcher: F,
    initial_cursor: Option<Cursor>,
    page_size: Option<u32>,
    observer: SharedObserver,
}

struct CursorState {
    pending: Option<CursorRequest>,
    emitted: usize,
}

impl<F> CursorPaginator<F> {
    /// Create a cursor paginator starting at the beginning of the collection
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            initial_cursor: None,
            page_size: None,
            observer: default_observer(),
        }
    }

    /// Start from a cursor retained from an earlier sequence
    #[must_use]
    pub fn with_initial_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.initial_cursor = Some(cursor.into());
        self
    }

    /// Pass a page size through to every request
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the observer
    #[must_use]
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Lazy stream of pages
    pub fn pages<'a, T>(&'a self) -> impl Stream<Item = Result<CursorPage<T>>> + Send + 'a
    where
        F: PageFetcher<CursorRequest, Page = CursorPage<T>>,
        T: Send + 'a,
    {
        let state = CursorState {
            pending: Some(CursorRequest {
                cursor: self.initial_cursor.clone(),
                page_size: self.page_size,
            }),
            emitted: 0,
        };

        stream::try_unfold(state, move |state| self.advance(state))
    }

    async fn advance<T>(
        &self,
        state: CursorState,
    ) -> Result<Option<(CursorPage<T>, CursorState)>>
    where
        F: PageFetcher<CursorRequest, Page = CursorPage<T>>,
    {
        let Some(request) = state.pending else {
            report_exhausted(&self.observer, Strategy::Cursor, state.emitted);
            return Ok(None);
        };

        let page = self
            .fetcher
            .fetch_page(request)
            .await
            .map_err(|e| report_abort(&self.observer, Strategy::Cursor, state.emitted, e))?;
        report_page(&self.observer, Strategy::Cursor, state.emitted, page.len());

        // an empty page ends the sequence even if the remote still issued a cursor
        let pending = if page.is_empty() {
            None
        } else {
            page.next_cursor().map(|cursor| CursorRequest {
                cursor: Some(cursor.clone()),
                page_size: self.page_size,
            })
        };

        Ok(Some((
            page,
            CursorState {
                pending,
                emitted: state.emitted + 1,
            },
        )))
    }

    /// Lazy stream of items across all pages
    pub fn items<'a, T>(&'a self) -> impl Stream<Item = Result<T>> + Send + 'a
    where
        F: PageFetcher<CursorRequest, Page = CursorPage<T>>,
        T: Send + 'a,
    {
        flatten_pages(self.pages())
    }
}

// ============================================================================
// Time Window Pagination
// ============================================================================

/// Backward moving time window pagination
///
/// Each page is requested for `[from_time, to_time]`. After a page arrives,
/// `next_to_time(&page, to_time)` yields the upper bound of the next window.
/// The sequence ends when that returns `None` or drops below `from_time`.
/// A value above the current `to_time` is a protocol violation: the page is
/// still emitted, the next poll yields [`Error::ToTimeIncreased`] and the
/// stream ends without another fetch.
pub struct TimeWindowPaginator<F, N> {
    fetcher: F,
    next_to_time: N,
    from_time: Option<Timestamp>,
    to_time: Option<Timestamp>,
    window_millis: Timestamp,
    observer: SharedObserver,
}

enum WindowState {
    Open {
        from_time: Timestamp,
        to_time: Option<Timestamp>,
        emitted: usize,
    },
    Failed {
        error: Error,
        emitted: usize,
    },
}

impl<F, N> TimeWindowPaginator<F, N> {
    /// Create a time window paginator covering the last day up to now
    pub fn new(fetcher: F, next_to_time: N) -> Self {
        Self {
            fetcher,
            next_to_time,
            from_time: None,
            to_time: None,
            window_millis: DAY_MILLIS,
            observer: default_observer(),
        }
    }

    /// Create a time window paginator with the configured default window.
    ///
    /// An invalid window surfaces as the first stream element.
    pub fn from_config(fetcher: F, next_to_time: N, config: &PaginationConfig) -> Self {
        Self {
            window_millis: config.window_millis,
            ..Self::new(fetcher, next_to_time)
        }
    }

    /// Set the lower bound
    #[must_use]
    pub fn with_from_time(mut self, from_time: Timestamp) -> Self {
        self.from_time = Some(from_time);
        self
    }

    /// Set the initial upper bound
    #[must_use]
    pub fn with_to_time(mut self, to_time: Timestamp) -> Self {
        self.to_time = Some(to_time);
        self
    }

    /// Set the observer
    #[must_use]
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Resolve the starting window; defaults are taken at call time.
    ///
    /// A non-positive default window is rejected when it would be used.
    fn initial_window(&self) -> Result<(Timestamp, Timestamp)> {
        let to_time = self.to_time.unwrap_or_else(now_millis);
        let from_time = match self.from_time {
            Some(from_time) => from_time,
            None if self.window_millis <= 0 => {
                return Err(Error::invalid_value(
                    "window_millis",
                    "must be a positive duration",
                ));
            }
            None => to_time.saturating_sub(self.window_millis),
        };
        Ok((from_time, to_time))
    }

    /// Lazy stream of pages
    pub fn pages<'a, T>(&'a self) -> impl Stream<Item = Result<Page<T>>> + Send + 'a
    where
        F: PageFetcher<TimeWindowRequest, Page = Page<T>>,
        N: Fn(&Page<T>, Timestamp) -> Option<Timestamp> + Send + Sync,
        T: Send + 'a,
    {
        let state = match self.initial_window() {
            Ok((from_time, to_time)) => WindowState::Open {
                from_time,
                to_time: Some(to_time),
                emitted: 0,
            },
            Err(error) => WindowState::Failed { error, emitted: 0 },
        };

        stream::try_unfold(state, move |state| self.advance(state))
    }

    async fn advance<T>(&self, state: WindowState) -> Result<Option<(Page<T>, WindowState)>>
    where
        F: PageFetcher<TimeWindowRequest, Page = Page<T>>,
        N: Fn(&Page<T>, Timestamp) -> Option<Timestamp>,
    {
        let (from_time, to_time, emitted) = match state {
            WindowState::Failed { error, emitted } => {
                return Err(report_abort(
                    &self.observer,
                    Strategy::TimeWindow,
                    emitted,
                    error,
                ));
            }
            WindowState::Open {
                from_time,
                to_time: Some(to_time),
                emitted,
            } if from_time <= to_time => (from_time, to_time, emitted),
            WindowState::Open { emitted, .. } => {
                report_exhausted(&self.observer, Strategy::TimeWindow, emitted);
                return Ok(None);
            }
        };

        let request = TimeWindowRequest { from_time, to_time };
        let page = self
            .fetcher
            .fetch_page(request)
            .await
            .map_err(|e| report_abort(&self.observer, Strategy::TimeWindow, emitted, e))?;
        report_page(&self.observer, Strategy::TimeWindow, emitted, page.len());

        let next_state = match (self.next_to_time)(&page, to_time) {
            Some(next) if next > to_time => WindowState::Failed {
                error: Error::ToTimeIncreased {
                    previous: to_time,
                    next,
                },
                emitted: emitted + 1,
            },
            next => WindowState::Open {
                from_time,
                to_time: next,
                emitted: emitted + 1,
            },
        };

        Ok(Some((page, next_state)))
    }

    /// Lazy stream of items across all pages
    pub fn items<'a, T>(&'a self) -> impl Stream<Item = Result<T>> + Send + 'a
    where
        F: PageFetcher<TimeWindowRequest, Page = Page<T>>,
        N: Fn(&Page<T>, Timestamp) -> Option<Timestamp> + Send + Sync,
        T: Send + 'a,
    {
        flatten_pages(self.pages())
    }
}

/// Standard continuation for time-window endpoints.
///
/// The next upper bound is the oldest item timestamp on the page minus one
/// millisecond, so that item is not fetched again. Empty pages, or pages
/// where no item has a timestamp, end the sequence.
pub fn oldest_item_boundary<T, G>(
    timestamp_of: G,
) -> impl Fn(&Page<T>, Timestamp) -> Option<Timestamp> + Send + Sync + Clone
where
    G: Fn(&T) -> Option<Timestamp> + Send + Sync + Clone,
{
    move |page: &Page<T>, _previous: Timestamp| {
        page.items
            .iter()
            .filter_map(&timestamp_of)
            .min()
            .and_then(|oldest| oldest.checked_sub(1))
    }
}
