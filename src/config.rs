//! Configuration module for the rebird bot.
//!
//! This module loads the account credentials from the secrets file named on
//! the command line and validates that every required field is present.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, error, info, warn};

use crate::error::{Error, Result};

/// Secrets-file key for the application consumer key.
pub const KEY_CONSUMER_KEY: &str = "consumer_key";
/// Secrets-file key for the application consumer secret.
pub const KEY_CONSUMER_SECRET: &str = "consumer_secret";
/// Secrets-file key for the numeric id of the authenticated account.
pub const KEY_USER_ID: &str = "user_id";
/// Secrets-file key for the account access token.
pub const KEY_ACCESS_TOKEN: &str = "access_token";
/// Secrets-file key for the account access token secret.
pub const KEY_ACCESS_TOKEN_SECRET: &str = "access_token_secret";

/// Credentials for one Twitter/X account.
///
/// All fields are opaque strings as far as the bot is concerned; the only
/// validation is that none of them is empty. The access token secret is part
/// of the credential set the transport layer needs and is carried alongside
/// the token it belongs to.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// The application (consumer) key
    pub consumer_key: String,
    /// The application (consumer) secret
    pub consumer_secret: String,
    /// The numeric id of the authenticated account
    pub user_id: u64,
    /// The account access token for user-context requests
    pub access_token: String,
    /// The secret paired with the access token
    pub access_token_secret: String,
}

impl Credentials {
    /// Loads credentials from a secrets file.
    ///
    /// The file holds `key = value` lines; blank lines and lines starting
    /// with `#` are ignored. All five keys must be present with non-empty
    /// values:
    ///
    /// ```text
    /// consumer_key = xxxxxxxx
    /// consumer_secret = xxxxxxxx
    /// user_id = 2291285905
    /// access_token = xxxxxxxx
    /// access_token_secret = xxxxxxxx
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending key when a required
    /// field is missing or empty, or when `user_id` is not a number; an I/O
    /// error when the file cannot be read. Either way the failure happens
    /// before any network activity.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading credentials from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read secrets file {}: {}", path.display(), e);
            e
        })?;

        let fields = parse_secrets(&contents);

        let consumer_key = require_field(&fields, KEY_CONSUMER_KEY)?;
        let consumer_secret = require_field(&fields, KEY_CONSUMER_SECRET)?;
        let user_id_raw = require_field(&fields, KEY_USER_ID)?;
        let access_token = require_field(&fields, KEY_ACCESS_TOKEN)?;
        let access_token_secret = require_field(&fields, KEY_ACCESS_TOKEN_SECRET)?;

        let user_id: u64 = user_id_raw.parse().map_err(|_| {
            error!("Secrets field '{}' is not a numeric id", KEY_USER_ID);
            Error::config_key(
                format!("'{}' must be a numeric account id", KEY_USER_ID),
                KEY_USER_ID,
            )
        })?;

        debug!("Consumer key (masked): {}", mask_secret(&consumer_key));
        debug!("Access token (masked): {}", mask_secret(&access_token));
        if access_token.len() < 10 {
            warn!(
                "Access token seems unusually short ({} characters)",
                access_token.len()
            );
        }

        info!("Credentials loaded for account {}", user_id);
        Ok(Credentials {
            consumer_key,
            consumer_secret,
            user_id,
            access_token,
            access_token_secret,
        })
    }
}

/// Parses secrets-file contents into a key/value map.
///
/// Later occurrences of a key overwrite earlier ones. Lines without an `=`
/// are ignored.
fn parse_secrets(contents: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    fields
}

/// Fetches a required field from the parsed secrets, rejecting empty values.
fn require_field(fields: &HashMap<String, String>, key: &str) -> Result<String> {
    match fields.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        Some(_) => {
            error!("Secrets field '{}' is empty", key);
            Err(Error::config_key(
                format!("secrets field '{}' must not be empty", key),
                key,
            ))
        }
        None => {
            error!("Secrets field '{}' is missing", key);
            Err(Error::config_key(
                format!("secrets file is missing required field '{}'", key),
                key,
            ))
        }
    }
}

/// Masks a secret for logging, keeping at most the first and last 4 bytes.
fn mask_secret(secret: &str) -> String {
    if secret.len() > 12 {
        format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
    } else if secret.len() > 4 {
        format!("{}...", &secret[..4])
    } else {
        "...".to_string()
    }
}
