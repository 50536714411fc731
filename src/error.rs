//! Error types for rebird.
//!
//! Every failure class the bot can hit gets its own variant so callers (and
//! tests) can tell a bad secrets file from a Twitter-side rejection from a
//! stuck pagination loop. The bot never retries or downgrades an error: the
//! first one encountered aborts the run and is surfaced as-is.

use thiserror::Error;

/// Result type alias for rebird operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rebird.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration, detected before any network call.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what is missing or invalid
        message: String,
        /// The secrets-file key involved, when one applies
        key: Option<String>,
    },

    /// Connection or timeout failure from the HTTP transport.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success response status from the Twitter API.
    ///
    /// Carries the raw response body for diagnostics; the body is not
    /// interpreted beyond being captured.
    #[error("Twitter API error ({status}): {body}")]
    Api {
        /// HTTP status code of the failed response
        status: u16,
        /// Raw response body as received
        body: String,
    },

    /// A response decoded as JSON but violates the expected shape, or an
    /// application-level field holds a value the bot cannot handle.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A non-empty page failed to advance the pagination boundary.
    ///
    /// Reported instead of looping forever against a source that keeps
    /// serving the same page.
    #[error("pagination stalled: boundary {boundary} did not advance after a non-empty page")]
    PaginationStall {
        /// The boundary value (max_id or cursor) that failed to move
        boundary: i64,
    },

    /// I/O error, e.g. while reading the secrets file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response body that is not valid JSON at all.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a configuration error without an associated key.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: None,
        }
    }

    /// Shorthand for a configuration error tied to a specific secrets key.
    pub fn config_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
