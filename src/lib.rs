//! # rebird
//!
//! A search-and-retweet bot for Twitter/X. Given a search query, rebird
//! fetches the authenticated account's own recent tweets, searches for
//! matching recent tweets from others, removes anything the account already
//! posted or retweeted, and retweets the remainder with a small pause between
//! actions.
//!
//! ## Structure
//!
//! - [`config`]: secrets-file loading into [`Credentials`]
//! - [`twitter`]: the API session, decoded data shapes, pagination loops and
//!   per-endpoint operations
//! - [`dedup`]: the pure candidate filter
//! - [`bot`]: the [`RetweetBot`] workflow, including simulation mode
//!
//! Everything runs strictly sequentially over one session per run; there is
//! no persistence and no state across runs.

pub mod bot;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use bot::{RetweetBot, RunReport};
pub use config::Credentials;
pub use dedup::select_new;
pub use error::{Error, Result};
pub use twitter::{Status, TwitterSession, User};
