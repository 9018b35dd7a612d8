//! Page to item flattening

use super::types::PageContent;
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};

/// Flatten a stream of pages into a stream of items.
///
/// Item order within and across pages is preserved. The next page is only
/// polled once every item of the current one has been yielded, and an error
/// from the page stream is passed through as-is.
pub fn flatten_pages<S, P>(pages: S) -> impl Stream<Item = Result<P::Item>> + Send
where
    S: Stream<Item = Result<P>> + Send,
    P: PageContent + Send,
    P::Item: Send,
{
    pages
        .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok::<_, Error>)))
        .try_flatten()
}
