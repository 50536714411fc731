//! Authorization header construction for the Twitter/X API.
//!
//! Two authentication contexts are in play: application-only (a bearer token
//! obtained once per process via the `oauth2/token` exchange, used for
//! read-only endpoints like search) and user context (the account access
//! token, used for everything that acts as the account). This module only
//! builds headers; the exchange itself lives in [`super::session`].

use base64::Engine;

/// Builds the Authorization header for the application-only bearer token
/// exchange.
///
/// The consumer key and secret are URL-encoded, joined with `:` and
/// base64-encoded into a `Basic` credential, as the `oauth2/token` endpoint
/// requires.
///
/// # Example
///
/// ```rust
/// use rebird::twitter::build_app_basic_header;
///
/// let header = build_app_basic_header("key", "secret");
/// assert!(header.starts_with("Basic "));
/// ```
pub fn build_app_basic_header(consumer_key: &str, consumer_secret: &str) -> String {
    let pair = format!(
        "{}:{}",
        urlencoding::encode(consumer_key),
        urlencoding::encode(consumer_secret)
    );
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(pair)
    )
}

/// Builds the Authorization header for application-context requests from an
/// already-obtained bearer token.
///
/// # Example
///
/// ```rust
/// use rebird::twitter::build_bearer_header;
///
/// let header = build_bearer_header("some_token");
/// assert_eq!(header, "Bearer some_token");
/// ```
pub fn build_bearer_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}

/// Builds the Authorization header for user-context requests.
///
/// The account access token is carried as the bearer credential; anything
/// beyond that (request signing) belongs to the transport layer, not here.
pub fn build_user_context_header(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}
