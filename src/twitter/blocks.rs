//! Blocked-account retrieval.
//!
//! The blocks endpoint is cursor-paginated: each response names the cursor
//! of the next page and `0` on the last one.

use async_trait::async_trait;
use log::info;
use serde_json::Value;

use crate::error::{Error, Result};

use super::pagination::{fetch_cursor_pages, CursorPageSource};
use super::session::TwitterSession;

/// Endpoint path for the blocked-account id list.
const BLOCKS_IDS_PATH: &str = "/1.1/blocks/ids.json";

/// Cursor page source over the blocks endpoint.
struct BlockedIdPages<'a> {
    session: &'a TwitterSession,
}

#[async_trait]
impl CursorPageSource for BlockedIdPages<'_> {
    type Item = u64;

    async fn fetch_page(&mut self, cursor: i64) -> Result<(Vec<u64>, i64)> {
        let params = [("cursor", cursor.to_string())];
        let response = self
            .session
            .user_get(BLOCKS_IDS_PATH, &params, "blocked_ids")
            .await?;

        let ids = response
            .get("ids")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                Error::Protocol("blocks response is missing an 'ids' array".to_string())
            })?
            .iter()
            .map(|v| {
                v.as_u64().ok_or_else(|| {
                    Error::Protocol("blocks response holds a non-numeric id".to_string())
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let next = response
            .get("next_cursor")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                Error::Protocol("blocks response is missing 'next_cursor'".to_string())
            })?;

        Ok((ids, next))
    }
}

/// Returns the ids of every account the authenticated user has blocked.
pub async fn get_blocked_ids(session: &TwitterSession) -> Result<Vec<u64>> {
    let mut pages = BlockedIdPages { session };
    let ids = fetch_cursor_pages(&mut pages).await?;
    info!("Account blocks {} users", ids.len());
    Ok(ids)
}
