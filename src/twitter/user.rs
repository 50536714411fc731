//! Decoded representation of an account, and account lookups.

use serde_json::Value;

use crate::error::{Error, Result};

use super::session::TwitterSession;

/// Endpoint path for validating the session's user credentials.
const VERIFY_CREDENTIALS_PATH: &str = "/1.1/account/verify_credentials.json";

/// Endpoint path for looking up an account by screen name.
const USERS_SHOW_PATH: &str = "/1.1/users/show.json";

/// One account as decoded from an API response.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique account id
    pub id: u64,
    /// The account's @-handle, without the @
    pub screen_name: String,
    /// Display name
    pub name: Option<String>,
    /// Follower count, when the API supplied one
    pub followers_count: Option<u64>,
}

impl User {
    /// Decodes one user object from a JSON value.
    ///
    /// `id` and `screen_name` are required; the rest decodes leniently and
    /// unknown fields are ignored.
    pub fn from_json(value: &Value) -> Result<User> {
        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::Protocol("user is missing a numeric 'id'".to_string()))?;

        let screen_name = value
            .get("screen_name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Protocol(format!("user {} is missing 'screen_name'", id)))?
            .to_string();

        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let followers_count = value.get("followers_count").and_then(Value::as_u64);

        Ok(User {
            id,
            screen_name,
            name,
            followers_count,
        })
    }
}

/// Verifies that the session's user credentials are accepted, returning the
/// account they belong to.
pub async fn verify_credentials(session: &TwitterSession) -> Result<User> {
    let response = session
        .user_get(VERIFY_CREDENTIALS_PATH, &[], "verify_credentials")
        .await?;
    User::from_json(&response)
}

/// Looks up an account by screen name.
pub async fn get_user_by_screen_name(session: &TwitterSession, screen_name: &str) -> Result<User> {
    let params = [("screen_name", screen_name.to_string())];
    let response = session
        .user_get(USERS_SHOW_PATH, &params, "users_show")
        .await?;
    User::from_json(&response)
}
