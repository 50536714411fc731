//! Twitter/X API integration module.
//!
//! Everything here operates on an explicit [`TwitterSession`] created once
//! per run: header construction, the session itself, the decoded data
//! shapes, the shared pagination loops and the per-endpoint operations.

mod auth;
mod blocks;
mod pagination;
mod search;
mod session;
mod status;
mod timeline;
mod tweets;
mod user;

// Re-export public API
pub use auth::{build_app_basic_header, build_bearer_header, build_user_context_header};
pub use blocks::get_blocked_ids;
pub use pagination::{
    fetch_cursor_pages, fetch_max_id_pages, CursorPageSource, MaxIdPageSource, CURSOR_END,
    CURSOR_START,
};
pub use search::{search_tweets, SEARCH_RESULTS_DEFAULT, SEARCH_RESULTS_MAX};
pub use session::{TwitterSession, API_BASE};
pub use status::Status;
pub use timeline::{fetch_own_timeline, TIMELINE_MAX_PER_REQUEST, TIMELINE_MAX_TWEETS};
pub use tweets::{get_tweet, retweet};
pub use user::{get_user_by_screen_name, verify_credentials, User};
