//! Own-timeline retrieval.
//!
//! The account's own tweets come from the user-timeline endpoint in user
//! context, retweets included (`include_rts=1`) and user objects trimmed to
//! their id (`trim_user=1`). Retrieval always runs to exhaustion: the
//! endpoint serves at most ~3200 historical tweets, and the dedup step needs
//! all of them to avoid re-retweeting.

use async_trait::async_trait;
use log::info;
use serde_json::Value;

use crate::error::{Error, Result};

use super::pagination::{fetch_max_id_pages, MaxIdPageSource};
use super::session::TwitterSession;
use super::status::Status;

/// Endpoint path for a user's timeline.
const USER_TIMELINE_PATH: &str = "/1.1/statuses/user_timeline.json";

/// Historical cap the endpoint itself imposes.
pub const TIMELINE_MAX_TWEETS: usize = 3200;

/// Largest page size the timeline endpoint accepts.
pub const TIMELINE_MAX_PER_REQUEST: usize = 200;

/// Max-id page source over the user-timeline endpoint.
struct TimelinePages<'a> {
    session: &'a TwitterSession,
    user_id: u64,
    page_size: usize,
}

#[async_trait]
impl MaxIdPageSource for TimelinePages<'_> {
    fn page_limit(&self) -> usize {
        self.page_size
    }

    async fn fetch_page(&mut self, max_id: Option<u64>, count: usize) -> Result<Vec<Status>> {
        let mut params: Vec<(&str, String)> = vec![
            ("user_id", self.user_id.to_string()),
            ("count", count.to_string()),
            ("include_rts", "1".to_string()),
            ("trim_user", "1".to_string()),
        ];
        if let Some(max_id) = max_id {
            params.push(("max_id", max_id.to_string()));
        }

        let response = self
            .session
            .user_get(USER_TIMELINE_PATH, &params, "user_timeline")
            .await?;
        let statuses = response.as_array().ok_or_else(|| {
            Error::Protocol("user timeline response is not an array".to_string())
        })?;
        Status::vec_from_json(statuses)
    }
}

/// Fetches the recent tweets of `user_id` (the authenticated account when
/// `None`), newest first, until the endpoint has nothing older to serve.
///
/// `max_count` caps the size of each page request; it does not bound the
/// total, which only the endpoint's own historical limit does.
///
/// # Errors
///
/// Propagates transport, API and decoding errors from the underlying pages
/// unchanged; the whole fetch aborts on the first failure.
pub async fn fetch_own_timeline(
    session: &TwitterSession,
    user_id: Option<u64>,
    max_count: usize,
) -> Result<Vec<Status>> {
    let user_id = user_id.unwrap_or_else(|| session.user_id());
    info!("Fetching timeline of account {}", user_id);

    let mut pages = TimelinePages {
        session,
        user_id,
        page_size: max_count.min(TIMELINE_MAX_PER_REQUEST),
    };
    let tweets = fetch_max_id_pages(&mut pages, None).await?;

    info!(
        "Timeline of account {} holds {} tweets",
        user_id,
        tweets.len()
    );
    Ok(tweets)
}
