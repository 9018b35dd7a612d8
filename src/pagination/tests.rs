//! Tests for pagination module

use super::*;
use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::observe::StatsObserver;
use crate::types::{now_millis, Timestamp, DAY_MILLIS};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Helpers
// ============================================================================

/// Serves scripted responses in order and records every request
struct Script<R, P> {
    responses: Mutex<VecDeque<Result<P>>>,
    requests: Arc<Mutex<Vec<R>>>,
}

#[async_trait]
impl<R, P> PageFetcher<R> for Script<R, P>
where
    R: Send + 'static,
    P: Send,
{
    type Page = P;

    async fn fetch_page(&self, request: R) -> Result<P> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::fetch("script exhausted")))
    }
}

fn script<R, P>(responses: Vec<Result<P>>) -> (Script<R, P>, Arc<Mutex<Vec<R>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let fetcher = Script {
        responses: Mutex::new(responses.into()),
        requests: requests.clone(),
    };
    (fetcher, requests)
}

/// A page of `len` consecutive numbers starting at `first`
fn page_of(first: u32, len: u32) -> Page<u32> {
    Page::new((first..first + len).collect())
}

fn sizes<P: PageContent>(pages: &[P]) -> Vec<usize> {
    pages.iter().map(PageContent::len).collect()
}

// ============================================================================
// Type Tests
// ============================================================================

#[test]
fn test_cursor_is_opaque() {
    let cursor = Cursor::from("eyJwYWdlIjogMn0=");
    assert_eq!(cursor.as_str(), "eyJwYWdlIjogMn0=");
    assert_eq!(cursor.to_string(), "eyJwYWdlIjogMn0=");
    assert!(!cursor.is_empty());
    assert!(Cursor::new("").is_empty());
    assert_eq!(cursor.clone().into_inner(), "eyJwYWdlIjogMn0=".to_string());
}

#[test]
fn test_page_deserialize() {
    let page: Page<String> = serde_json::from_value(json!({
        "items": ["a", "b"],
        "pageNumber": 2,
        "pageSize": 2,
        "totalElements": 9,
        "hasNext": true
    }))
    .unwrap();

    assert_eq!(page.items, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(page.page_number, Some(2));
    assert_eq!(page.page_size, Some(2));
    assert_eq!(page.total_elements, Some(9));
    assert_eq!(page.has_next, Some(true));
}

#[test]
fn test_page_deserialize_minimal() {
    let page: Page<u32> = serde_json::from_value(json!({})).unwrap();
    assert!(page.items.is_empty());
    assert!(page.has_next.is_none());
}

#[test]
fn test_cursor_page_deserialize() {
    let page: CursorPage<u32> = serde_json::from_value(json!({
        "items": [1, 2, 3],
        "responseMetadata": {"nextCursor": "abc"}
    }))
    .unwrap();
    assert_eq!(page.items, vec![1, 2, 3]);
    assert_eq!(page.next_cursor(), Some(&Cursor::from("abc")));

    let page: CursorPage<u32> = serde_json::from_value(json!({
        "items": [1],
        "responseMetadata": {"nextCursor": ""}
    }))
    .unwrap();
    assert!(page.next_cursor().is_none());

    let page: CursorPage<u32> = serde_json::from_value(json!({"items": [1]})).unwrap();
    assert!(page.next_cursor().is_none());
}

#[test]
fn test_has_more_pages() {
    // short page ends it
    assert!(page_of(0, 5).has_more_pages(0, 5));
    assert!(!page_of(0, 2).has_more_pages(0, 5));

    // empty page always ends it
    assert!(!Page::<u32>::new(vec![]).with_has_next(true).has_more_pages(0, 5));

    // explicit flag wins over item count
    assert!(!page_of(0, 5).with_has_next(false).has_more_pages(0, 5));
    assert!(page_of(0, 2).with_has_next(true).has_more_pages(0, 5));

    // total elements
    assert!(page_of(0, 5).with_total_elements(12).has_more_pages(1, 5));
    assert!(!page_of(0, 5).with_total_elements(10).has_more_pages(1, 5));
}

// ============================================================================
// Offset Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_offset_stops_after_short_page() {
    let (fetcher, requests) = script(vec![
        Ok(page_of(0, 5)),
        Ok(page_of(5, 5)),
        Ok(page_of(10, 5)),
        Ok(page_of(15, 2)),
        Ok(page_of(17, 5)),
    ]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(sizes(&pages), vec![5, 5, 5, 2]);
    let numbers: Vec<u32> = requests.lock().unwrap().iter().map(|r| r.page_number).collect();
    assert_eq!(numbers, vec![0, 1, 2, 3]);
    assert!(requests.lock().unwrap().iter().all(|r| r.page_size == 5));
}

#[tokio::test]
async fn test_offset_honours_has_next() {
    let (fetcher, requests) = script(vec![
        Ok(page_of(0, 5).with_has_next(true)),
        Ok(page_of(5, 5).with_has_next(false)),
    ]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_offset_stops_on_empty_page() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 5)), Ok(page_of(5, 0))]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(sizes(&pages), vec![5, 0]);
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_offset_uses_total_elements() {
    let (fetcher, requests) = script(vec![
        Ok(page_of(0, 5).with_total_elements(15)),
        Ok(page_of(5, 5).with_total_elements(15)),
        Ok(page_of(10, 5).with_total_elements(15)),
    ]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(requests.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_offset_start_page() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1))]);
    let config = PaginationConfig {
        start_page: 3,
        page_size: 10,
        ..PaginationConfig::default()
    };
    let paginator = OffsetPaginator::from_config(fetcher, &config);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(
        requests.lock().unwrap().clone(),
        vec![OffsetRequest {
            page_number: 3,
            page_size: 10
        }]
    );
}

#[tokio::test]
async fn test_offset_is_restartable() {
    let (fetcher, requests) = script(vec![
        Ok(page_of(0, 2)),
        Ok(page_of(2, 1)),
        Ok(page_of(0, 2)),
        Ok(page_of(2, 1)),
    ]);
    let paginator = OffsetPaginator::new(fetcher, 0, 2);

    let first: Vec<u32> = paginator.items().try_collect().await.unwrap();
    let second: Vec<u32> = paginator.items().try_collect().await.unwrap();

    assert_eq!(first, vec![0, 1, 2]);
    assert_eq!(first, second);
    let numbers: Vec<u32> = requests.lock().unwrap().iter().map(|r| r.page_number).collect();
    assert_eq!(numbers, vec![0, 1, 0, 1]);
}

#[tokio::test]
async fn test_offset_is_lazy() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 5)), Ok(page_of(5, 5))]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let pages = paginator.pages();
    assert!(requests.lock().unwrap().is_empty());

    let first: Vec<_> = pages.take(1).collect().await;
    assert_eq!(first.len(), 1);
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_offset_zero_page_size_is_rejected() {
    let (fetcher, requests) = script::<OffsetRequest, Page<u32>>(vec![Ok(page_of(0, 5))]);
    let paginator = OffsetPaginator::new(fetcher, 0, 0);

    let results: Vec<Result<Page<u32>>> = paginator.pages().collect().await;

    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(Error::InvalidConfigValue { ref field, .. }) if field == "page_size"
    ));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_offset_stops_at_last_page_number() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1)), Ok(page_of(1, 1))]);
    let paginator = OffsetPaginator::new(fetcher, u32::MAX, 1);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(requests.lock().unwrap()[0].page_number, u32::MAX);
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_offset_error_ends_sequence() {
    let stats = Arc::new(StatsObserver::new());
    let (fetcher, requests) = script(vec![
        Ok(page_of(0, 5)),
        Err(Error::fetch("500 from upstream")),
        Ok(page_of(10, 5)),
    ]);
    let paginator = OffsetPaginator::new(fetcher, 0, 5).with_observer(stats.clone());

    let mut pages = Box::pin(paginator.pages());
    assert_eq!(pages.next().await.unwrap().unwrap().len(), 5);
    assert!(matches!(pages.next().await, Some(Err(Error::Fetch { .. }))));
    assert!(pages.next().await.is_none());

    assert_eq!(requests.lock().unwrap().len(), 2);
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.pages, 1);
    assert_eq!(snapshot.items, 5);
    assert_eq!(snapshot.aborted, 1);
}

#[tokio::test]
async fn test_offset_items_preserve_order() {
    let (fetcher, _) = script(vec![Ok(page_of(0, 3)), Ok(page_of(3, 3)), Ok(page_of(6, 1))]);
    let paginator = OffsetPaginator::new(fetcher, 0, 3);

    let items: Vec<u32> = paginator.items().try_collect().await.unwrap();

    assert_eq!(items, (0..7).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_offset_with_closure_fetcher() {
    let fetcher = |request: OffsetRequest| async move {
        let remaining = 12u32.saturating_sub(request.page_number * request.page_size);
        let len = remaining.min(request.page_size);
        Ok::<_, Error>(page_of(request.page_number * request.page_size, len))
    };
    let paginator = OffsetPaginator::new(fetcher, 0, 5);

    let items: Vec<u32> = paginator.items().try_collect().await.unwrap();

    assert_eq!(items.len(), 12);
}

// ============================================================================
// Cursor Paginator Tests
// ============================================================================

fn cursor_page(first: u32, len: u32, next: Option<&str>) -> CursorPage<u32> {
    CursorPage::new((first..first + len).collect(), next.map(Cursor::from))
}

#[tokio::test]
async fn test_cursor_stops_on_empty_cursor() {
    let (fetcher, requests) = script(vec![
        Ok(cursor_page(0, 2, Some("a"))),
        Ok(cursor_page(2, 2, Some("b"))),
        Ok(cursor_page(4, 2, Some(""))),
        Ok(cursor_page(6, 2, Some("c"))),
    ]);
    let paginator = CursorPaginator::new(fetcher);

    let pages: Vec<CursorPage<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 3);
    let cursors: Vec<Option<Cursor>> = requests
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.cursor.clone())
        .collect();
    assert_eq!(
        cursors,
        vec![None, Some(Cursor::from("a")), Some(Cursor::from("b"))]
    );
}

#[tokio::test]
async fn test_cursor_stops_on_missing_cursor() {
    let (fetcher, requests) = script(vec![
        Ok(cursor_page(0, 2, Some("a"))),
        Ok(cursor_page(2, 1, None)),
    ]);
    let paginator = CursorPaginator::new(fetcher);

    let items: Vec<u32> = paginator.items().try_collect().await.unwrap();

    assert_eq!(items, vec![0, 1, 2]);
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cursor_stops_on_empty_page() {
    let (fetcher, requests) = script(vec![
        Ok(cursor_page(0, 2, Some("a"))),
        Ok(cursor_page(0, 0, Some("b"))),
        Ok(cursor_page(2, 2, None)),
    ]);
    let paginator = CursorPaginator::new(fetcher);

    let pages: Vec<CursorPage<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(sizes(&pages), vec![2, 0]);
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cursor_initial_cursor_and_page_size() {
    let (fetcher, requests) = script(vec![Ok(cursor_page(0, 1, None))]);
    let paginator = CursorPaginator::new(fetcher)
        .with_initial_cursor("resume-here")
        .with_page_size(25);

    let pages: Vec<CursorPage<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(
        requests.lock().unwrap().clone(),
        vec![CursorRequest {
            cursor: Some(Cursor::from("resume-here")),
            page_size: Some(25),
        }]
    );
}

#[tokio::test]
async fn test_cursor_error_ends_sequence() {
    let (fetcher, requests) = script(vec![
        Ok(cursor_page(0, 2, Some("a"))),
        Err(Error::transient("connection reset")),
    ]);
    let paginator = CursorPaginator::new(fetcher);

    let results: Vec<Result<CursorPage<u32>>> = paginator.pages().collect().await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::Transient { .. })));
    assert_eq!(requests.lock().unwrap().len(), 2);
}

// ============================================================================
// Time Window Paginator Tests
// ============================================================================

fn step_back(by: Timestamp) -> impl Fn(&Page<u32>, Timestamp) -> Option<Timestamp> + Send + Sync {
    move |_page: &Page<u32>, previous: Timestamp| Some(previous - by)
}

#[tokio::test]
async fn test_time_window_walks_back_to_from_time() {
    let responses = (0..20).map(|i| Ok(page_of(i, 1))).collect();
    let (fetcher, requests) = script(responses);
    let paginator = TimeWindowPaginator::new(fetcher, step_back(100))
        .with_from_time(100)
        .with_to_time(1000);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 10);
    let windows: Vec<(Timestamp, Timestamp)> = requests
        .lock()
        .unwrap()
        .iter()
        .map(|r| (r.from_time, r.to_time))
        .collect();
    let expected: Vec<(Timestamp, Timestamp)> =
        (1..=10).rev().map(|step| (100, step * 100)).collect();
    assert_eq!(windows, expected);
}

#[tokio::test]
async fn test_time_window_rejects_increasing_to_time() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 3)), Ok(page_of(3, 3))]);
    let increasing = |_page: &Page<u32>, previous: Timestamp| Some(previous + 1);
    let paginator = TimeWindowPaginator::new(fetcher, increasing)
        .with_from_time(0)
        .with_to_time(500);

    let mut pages = Box::pin(paginator.pages());
    assert_eq!(pages.next().await.unwrap().unwrap().len(), 3);

    let err = pages.next().await.unwrap().unwrap_err();
    assert!(err.is_protocol_violation());
    assert!(matches!(
        err,
        Error::ToTimeIncreased {
            previous: 500,
            next: 501
        }
    ));

    assert!(pages.next().await.is_none());
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_time_window_unchanged_to_time_is_allowed() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1)), Ok(page_of(1, 1))]);
    let calls = Arc::new(Mutex::new(0));
    let counter = calls.clone();
    // hold the bound once, then give up
    let next = move |_page: &Page<u32>, previous: Timestamp| {
        let mut n = counter.lock().unwrap();
        *n += 1;
        (*n == 1).then_some(previous)
    };
    let paginator = TimeWindowPaginator::new(fetcher, next)
        .with_from_time(0)
        .with_to_time(50);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(requests.lock().unwrap()[1].to_time, 50);
}

#[tokio::test]
async fn test_time_window_none_is_exhaustion() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 4)), Ok(page_of(4, 4))]);
    let done = |_page: &Page<u32>, _previous: Timestamp| -> Option<Timestamp> { None };
    let paginator = TimeWindowPaginator::new(fetcher, done)
        .with_from_time(0)
        .with_to_time(10);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_time_window_empty_range_fetches_nothing() {
    let (fetcher, requests) = script::<TimeWindowRequest, Page<u32>>(vec![Ok(page_of(0, 1))]);
    let paginator = TimeWindowPaginator::new(fetcher, step_back(1))
        .with_from_time(1000)
        .with_to_time(999);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert!(pages.is_empty());
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_time_window_defaults_to_last_day() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1))]);
    let done = |_page: &Page<u32>, _previous: Timestamp| -> Option<Timestamp> { None };
    let paginator = TimeWindowPaginator::new(fetcher, done);

    let before = now_millis();
    let _: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();
    let after = now_millis();

    let request = requests.lock().unwrap()[0];
    assert!(request.to_time >= before && request.to_time <= after);
    assert_eq!(request.to_time - request.from_time, DAY_MILLIS);
}

#[tokio::test]
async fn test_time_window_from_config() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1))]);
    let done = |_page: &Page<u32>, _previous: Timestamp| -> Option<Timestamp> { None };
    let config = PaginationConfig {
        window_millis: 60_000,
        ..PaginationConfig::default()
    };
    let paginator = TimeWindowPaginator::from_config(fetcher, done, &config).with_to_time(1_000_000);

    let _: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(
        requests.lock().unwrap()[0],
        TimeWindowRequest {
            from_time: 940_000,
            to_time: 1_000_000
        }
    );
}

#[tokio::test]
async fn test_time_window_rejects_non_positive_window() {
    let (fetcher, requests) = script::<TimeWindowRequest, Page<u32>>(vec![Ok(page_of(0, 1))]);
    let config = PaginationConfig {
        window_millis: -5,
        ..PaginationConfig::default()
    };
    let paginator = TimeWindowPaginator::from_config(fetcher, step_back(1), &config).with_to_time(100);

    let results: Vec<Result<Page<u32>>> = paginator.pages().collect().await;

    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(Error::InvalidConfigValue { ref field, .. }) if field == "window_millis"
    ));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_time_window_explicit_from_time_ignores_window() {
    let (fetcher, requests) = script(vec![Ok(page_of(0, 1))]);
    let done = |_page: &Page<u32>, _previous: Timestamp| -> Option<Timestamp> { None };
    let config = PaginationConfig {
        window_millis: 0,
        ..PaginationConfig::default()
    };
    let paginator = TimeWindowPaginator::from_config(fetcher, done, &config)
        .with_from_time(10)
        .with_to_time(100);

    let pages: Vec<Page<u32>> = paginator.pages().try_collect().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(requests.lock().unwrap()[0].from_time, 10);
}

#[test]
fn test_oldest_item_boundary() {
    let boundary = oldest_item_boundary(|ts: &Timestamp| Some(*ts));

    let page = Page::new(vec![900, 750, 820]);
    assert_eq!(boundary(&page, 1000), Some(749));

    let empty: Page<Timestamp> = Page::new(vec![]);
    assert_eq!(boundary(&empty, 1000), None);

    // nothing older than the smallest timestamp exists
    assert_eq!(boundary(&Page::new(vec![i64::MIN, 5]), 1000), None);
}

#[tokio::test]
async fn test_time_window_with_oldest_item_boundary() {
    // newest first, as the remote returns them
    let (fetcher, requests) = script(vec![
        Ok(Page::new(vec![990, 950, 900])),
        Ok(Page::new(vec![899, 600])),
        Ok(Page::new(vec![])),
    ]);
    let paginator = TimeWindowPaginator::new(fetcher, oldest_item_boundary(|ts: &Timestamp| Some(*ts)))
        .with_from_time(500)
        .with_to_time(1000);

    let items: Vec<Timestamp> = paginator.items().try_collect().await.unwrap();

    assert_eq!(items, vec![990, 950, 900, 899, 600]);
    let uppers: Vec<Timestamp> = requests.lock().unwrap().iter().map(|r| r.to_time).collect();
    assert_eq!(uppers, vec![1000, 899, 599]);
}

#[tokio::test]
async fn test_time_window_error_ends_sequence() {
    let (fetcher, requests) = script::<TimeWindowRequest, Page<u32>>(vec![Err(Error::RateLimited {
        retry_after_seconds: 30,
    })]);
    let paginator = TimeWindowPaginator::new(fetcher, step_back(10))
        .with_from_time(0)
        .with_to_time(100);

    let results: Vec<Result<Page<u32>>> = paginator.pages().collect().await;

    assert_eq!(results.len(), 1);
    assert!(results[0].as_ref().unwrap_err().is_retryable());
    assert_eq!(requests.lock().unwrap().len(), 1);
}

// ============================================================================
// Flatten Tests
// ============================================================================

#[tokio::test]
async fn test_flatten_pages_passes_errors_through() {
    let pages = futures::stream::iter(vec![
        Ok(page_of(0, 2)),
        Err(Error::fetch("boom")),
        Ok(page_of(2, 2)),
    ]);

    let results: Vec<Result<u32>> = flatten_pages(pages).collect().await;

    assert_eq!(results.len(), 5);
    assert_eq!(*results[0].as_ref().unwrap(), 0);
    assert_eq!(*results[1].as_ref().unwrap(), 1);
    assert!(results[2].is_err());
    assert_eq!(*results[4].as_ref().unwrap(), 3);
}

#[tokio::test]
async fn test_flatten_skips_empty_pages() {
    let pages = futures::stream::iter(vec![
        Ok::<_, Error>(page_of(0, 0)),
        Ok(page_of(0, 1)),
        Ok(page_of(1, 0)),
    ]);

    let items: Vec<u32> = flatten_pages(pages).try_collect().await.unwrap();

    assert_eq!(items, vec![0]);
}
