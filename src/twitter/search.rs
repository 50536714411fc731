//! Recent-tweet search.
//!
//! Searches run in application context and only cover the API's recent-tweet
//! window (about a week of history). Results beyond one page are collected
//! with the max-id strategy.

use async_trait::async_trait;
use log::info;
use serde_json::Value;

use crate::error::{Error, Result};

use super::pagination::{fetch_max_id_pages, MaxIdPageSource};
use super::session::TwitterSession;
use super::status::Status;

/// Endpoint path for recent-tweet search.
const SEARCH_PATH: &str = "/1.1/search/tweets.json";

/// Largest page size the search endpoint accepts.
pub const SEARCH_RESULTS_MAX: usize = 100;

/// Page size the endpoint defaults to when none is requested.
pub const SEARCH_RESULTS_DEFAULT: usize = 15;

/// Max-id page source over the search endpoint.
struct SearchPages<'a> {
    session: &'a mut TwitterSession,
    query: &'a str,
    lang: Option<&'a str>,
}

#[async_trait]
impl MaxIdPageSource for SearchPages<'_> {
    fn page_limit(&self) -> usize {
        SEARCH_RESULTS_MAX
    }

    async fn fetch_page(&mut self, max_id: Option<u64>, count: usize) -> Result<Vec<Status>> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", self.query.to_string()),
            ("include_entities", "false".to_string()),
            ("result_type", "mixed".to_string()),
            ("count", count.to_string()),
        ];
        if let Some(lang) = self.lang {
            params.push(("lang", lang.to_string()));
        }
        if let Some(max_id) = max_id {
            params.push(("max_id", max_id.to_string()));
        }

        let response = self
            .session
            .app_get(SEARCH_PATH, &params, "search_tweets")
            .await?;
        let statuses = response
            .get("statuses")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                Error::Protocol("search response is missing a 'statuses' array".to_string())
            })?;
        Status::vec_from_json(statuses)
    }
}

/// Searches recent tweets matching `query`, newest first.
///
/// Collects up to `target` results across as many pages as needed, clamping
/// each page request to the endpoint maximum; fewer come back when the
/// recent-tweet window is exhausted first. `lang` restricts results to one
/// language tag.
///
/// # Errors
///
/// Propagates transport, API and decoding errors from the underlying pages
/// unchanged; the whole fetch aborts on the first failure.
pub async fn search_tweets(
    session: &mut TwitterSession,
    query: &str,
    lang: Option<&str>,
    target: usize,
) -> Result<Vec<Status>> {
    info!("Searching recent tweets for '{}' (target {})", query, target);

    let mut pages = SearchPages {
        session,
        query,
        lang,
    };
    let found = fetch_max_id_pages(&mut pages, Some(target)).await?;

    info!("Search for '{}' returned {} tweets", query, found.len());
    Ok(found)
}
