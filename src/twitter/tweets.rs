//! Single-tweet operations: retweeting and lookup.

use log::info;

use crate::error::Result;

use super::session::TwitterSession;
use super::status::Status;

/// Endpoint path for looking up one tweet by id.
const SHOW_PATH: &str = "/1.1/statuses/show.json";

/// Retweets the tweet with the given id as the authenticated account.
///
/// Returns the retweet the API created. The API rejects retweeting something
/// the account already retweeted; that surfaces as an API error like any
/// other non-success response.
pub async fn retweet(session: &TwitterSession, id: u64) -> Result<Status> {
    info!("Retweeting {}", id);
    let path = format!("/1.1/statuses/retweet/{}.json", id);
    let response = session.user_post(&path, "retweet").await?;
    Status::from_json(&response)
}

/// Looks up a single tweet by id in application context.
pub async fn get_tweet(session: &mut TwitterSession, id: u64) -> Result<Status> {
    let params = [("id", id.to_string())];
    let response = session.app_get(SHOW_PATH, &params, "get_tweet").await?;
    Status::from_json(&response)
}
