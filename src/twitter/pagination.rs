//! Pagination loops shared by the retrieval operations.
//!
//! Two boundary-advancing strategies cover every paginated endpoint the bot
//! touches: max-id (each page bounds the next to ids strictly below the
//! lowest seen so far) and opaque cursors (each response names the next
//! cursor, with `0` meaning done). Both are explicit loops over an async
//! page-source trait, so the termination logic is testable without HTTP.
//!
//! A source that keeps serving the same page would loop forever; both loops
//! treat a boundary that fails to advance as a hard error instead.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::status::Status;

/// Cursor value that starts a cursor-paginated fetch.
pub const CURSOR_START: i64 = -1;

/// Cursor value the API returns on the final page.
pub const CURSOR_END: i64 = 0;

/// A source of status pages bounded by a descending max-id.
#[async_trait]
pub trait MaxIdPageSource {
    /// The largest page size the endpoint accepts. Requests above this are
    /// clamped and made up with additional pages.
    fn page_limit(&self) -> usize;

    /// Fetches one page of at most `count` statuses with ids `<= max_id`
    /// (unbounded when `max_id` is `None`), ordered newest-first.
    async fn fetch_page(&mut self, max_id: Option<u64>, count: usize) -> Result<Vec<Status>>;
}

/// A source of cursor-delimited pages.
#[async_trait]
pub trait CursorPageSource {
    /// Element type of each page.
    type Item;

    /// Fetches the page at `cursor`, returning its items and the cursor of
    /// the next page (`0` when this was the last).
    async fn fetch_page(&mut self, cursor: i64) -> Result<(Vec<Self::Item>, i64)>;
}

/// Fetches pages of descending ids until the target count is reached or the
/// source is exhausted.
///
/// `target = None` fetches everything the source will serve. With a target,
/// the final page request is clamped to the remainder so the result never
/// requires more than one excess page, and a remainder of zero returns
/// without issuing a request at all.
///
/// # Errors
///
/// Any source error aborts the fetch with no partial result. A non-empty
/// page whose lowest id does not drop below the previous page's lowest is
/// reported as a pagination stall.
pub async fn fetch_max_id_pages<S>(source: &mut S, target: Option<usize>) -> Result<Vec<Status>>
where
    S: MaxIdPageSource + Send,
{
    let mut collected: Vec<Status> = Vec::new();
    let mut boundary: Option<u64> = None;
    let mut lowest_seen: Option<u64> = None;

    loop {
        let count = match target {
            Some(t) => {
                let remaining = t.saturating_sub(collected.len());
                remaining.min(source.page_limit())
            }
            None => source.page_limit(),
        };
        if count == 0 {
            break;
        }

        let page = source.fetch_page(boundary, count).await?;
        let Some(page_lowest) = page.iter().map(|s| s.id).min() else {
            break;
        };

        if let Some(prev) = lowest_seen {
            if page_lowest >= prev {
                return Err(Error::PaginationStall {
                    boundary: prev.saturating_sub(1) as i64,
                });
            }
        }

        collected.extend(page);
        lowest_seen = Some(page_lowest);
        boundary = Some(page_lowest.saturating_sub(1));
    }

    Ok(collected)
}

/// Fetches cursor-delimited pages until the source returns the end sentinel.
///
/// # Errors
///
/// Any source error aborts the fetch with no partial result. A response that
/// echoes back the cursor it was asked for (without being the sentinel) is
/// reported as a pagination stall.
pub async fn fetch_cursor_pages<S>(source: &mut S) -> Result<Vec<S::Item>>
where
    S: CursorPageSource + Send,
    S::Item: Send,
{
    let mut collected: Vec<S::Item> = Vec::new();
    let mut cursor = CURSOR_START;

    loop {
        let (items, next) = source.fetch_page(cursor).await?;
        collected.extend(items);

        if next == CURSOR_END {
            break;
        }
        if next == cursor {
            return Err(Error::PaginationStall { boundary: cursor });
        }
        cursor = next;
    }

    Ok(collected)
}
