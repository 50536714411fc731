//! Decoded representation of one tweet.
//!
//! Statuses are plain immutable values materialized from API responses; each
//! shape has a single explicit decoding function and unknown fields in the
//! response are ignored.

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};

/// Wire format of the `created_at` field on v1.1 payloads,
/// e.g. `Wed Aug 27 13:08:45 +0000 2008`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// One tweet as decoded from an API response.
///
/// `id` is the sort and pagination key: unique per tweet and monotonically
/// increasing with creation time. `created_at` is advisory only and never
/// used for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    /// Unique tweet id
    pub id: u64,
    /// Id of the posting account
    pub author_id: u64,
    /// UTF-8 tweet text (may be truncated server-side)
    pub text: String,
    /// Language tag claimed by the API, used only as a search filter
    pub lang: Option<String>,
    /// The original tweet when this record is itself a retweet.
    ///
    /// The API collapses retweet-of-retweet chains, so the referenced status
    /// never carries a `retweeted_status` of its own; that invariant is
    /// trusted, not re-verified here.
    pub retweeted_status: Option<Box<Status>>,
    /// Creation time, when the API supplied one we could parse
    pub created_at: Option<DateTime<Utc>>,
    /// How often this tweet has been retweeted
    pub retweet_count: Option<u64>,
    /// How often this tweet has been favorited
    pub favorite_count: Option<u64>,
}

impl Status {
    /// Whether this record is a retweet of another tweet.
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Decodes one status object from a JSON value.
    ///
    /// `id`, `user.id` and `text` are required; a payload without them does
    /// not describe a usable tweet and is rejected as a protocol error.
    /// Everything else decodes leniently: absent or malformed optional fields
    /// become `None` rather than failing the whole fetch.
    pub fn from_json(value: &Value) -> Result<Status> {
        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::Protocol("status is missing a numeric 'id'".to_string()))?;

        // Present even under trim_user, where the user object shrinks to
        // just its id.
        let author_id = value
            .get("user")
            .and_then(|u| u.get("id"))
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                Error::Protocol(format!("status {} is missing a numeric 'user.id'", id))
            })?;

        let text = value
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Protocol(format!("status {} is missing 'text'", id)))?
            .to_string();

        let lang = value
            .get("lang")
            .and_then(Value::as_str)
            .map(str::to_string);

        let retweeted_status = match value.get("retweeted_status") {
            Some(inner) if !inner.is_null() => Some(Box::new(Status::from_json(inner)?)),
            _ => None,
        };

        let created_at = value
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|raw| parse_created_at(id, raw));

        let retweet_count = value.get("retweet_count").and_then(Value::as_u64);
        let favorite_count = value.get("favorite_count").and_then(Value::as_u64);

        Ok(Status {
            id,
            author_id,
            text,
            lang,
            retweeted_status,
            created_at,
            retweet_count,
            favorite_count,
        })
    }

    /// Decodes a JSON array of status objects, preserving source order.
    pub fn vec_from_json(values: &[Value]) -> Result<Vec<Status>> {
        values.iter().map(Status::from_json).collect()
    }
}

/// Parses the v1.1 `created_at` wire format, returning `None` on anything
/// unparseable. Timestamps are advisory; a bad one is logged, not fatal.
fn parse_created_at(id: u64, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_str(raw, CREATED_AT_FORMAT) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            debug!("Ignoring unparseable created_at '{}' on {}: {}", raw, id, e);
            None
        }
    }
}
