//! The authenticated API session.
//!
//! A [`TwitterSession`] is created once per run and passed to every operation
//! that talks to the API: it owns the configured HTTP client, the account
//! credentials and the cached application bearer token. Request helpers
//! centralize status checking so every operation gets the same error-body
//! capture on failure.

use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::Credentials;
use crate::error::{Error, Result};

use super::auth::{build_app_basic_header, build_bearer_header, build_user_context_header};

/// Base URL of the Twitter API.
pub const API_BASE: &str = "https://api.twitter.com";

/// Path of the application-only bearer token exchange.
const OAUTH2_TOKEN_PATH: &str = "/oauth2/token";

/// User agent sent with every request.
const HTTP_USER_AGENT: &str = concat!("rebird v", env!("CARGO_PKG_VERSION"));

/// Transport-level connect timeout.
const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport-level read timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Decoded body of a successful `oauth2/token` response.
#[derive(Debug, Deserialize)]
struct BearerTokenResponse {
    token_type: String,
    access_token: String,
}

/// An authenticated session against the Twitter API.
///
/// The session is not designed for concurrent use; the bot runs strictly
/// sequentially and a single run owns its session for its whole lifetime.
#[derive(Debug)]
pub struct TwitterSession {
    http: Client,
    credentials: Credentials,
    api_base: String,
    bearer_token: Option<String>,
}

impl TwitterSession {
    /// Creates a session from account credentials.
    ///
    /// Builds the HTTP client with the transport timeouts and user agent all
    /// requests share.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the consumer key or secret is
    /// empty, or a network error when the HTTP client cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self> {
        if credentials.consumer_key.is_empty() || credentials.consumer_secret.is_empty() {
            return Err(Error::config("consumer key and secret must not be empty"));
        }

        let http = Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .build()?;

        Ok(TwitterSession {
            http,
            credentials,
            api_base: API_BASE.to_string(),
            bearer_token: None,
        })
    }

    /// Points the session at a different API base URL. Used by tests to talk
    /// to a local mock server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// The id of the authenticated account.
    pub fn user_id(&self) -> u64 {
        self.credentials.user_id
    }

    /// Returns the cached application bearer token, obtaining one on first
    /// use.
    ///
    /// The exchange POSTs `grant_type=client_credentials` with a Basic header
    /// carrying the consumer key pair. A response whose `token_type` is not
    /// `bearer` signals a contract violation and fails the run.
    async fn bearer_token(&mut self) -> Result<String> {
        if let Some(token) = &self.bearer_token {
            return Ok(token.clone());
        }

        info!("Obtaining application bearer token");
        let request = self
            .http
            .post(format!("{}{}", self.api_base, OAUTH2_TOKEN_PATH))
            .header(
                "Authorization",
                build_app_basic_header(
                    &self.credentials.consumer_key,
                    &self.credentials.consumer_secret,
                ),
            )
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body("grant_type=client_credentials");

        let body = send_checked(request, "bearer_token").await?;
        let decoded: BearerTokenResponse = serde_json::from_str(&body)?;
        if decoded.token_type != "bearer" {
            return Err(Error::Protocol(format!(
                "unexpected token type '{}' from the bearer exchange",
                decoded.token_type
            )));
        }

        self.bearer_token = Some(decoded.access_token.clone());
        Ok(decoded.access_token)
    }

    /// GET in application context (bearer token), returning the decoded JSON
    /// body.
    pub(crate) async fn app_get(
        &mut self,
        path: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> Result<Value> {
        let token = self.bearer_token().await?;
        let url = self.build_url(path, params);
        debug!("GET {} ({})", url, operation);
        let request = self
            .http
            .get(&url)
            .header("Authorization", build_bearer_header(&token));
        let body = send_checked(request, operation).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET in user context (account access token), returning the decoded
    /// JSON body.
    pub(crate) async fn user_get(
        &self,
        path: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> Result<Value> {
        let url = self.build_url(path, params);
        debug!("GET {} ({})", url, operation);
        let request = self.http.get(&url).header(
            "Authorization",
            build_user_context_header(&self.credentials.access_token),
        );
        let body = send_checked(request, operation).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST in user context, returning the decoded JSON body.
    pub(crate) async fn user_post(&self, path: &str, operation: &str) -> Result<Value> {
        let url = format!("{}{}", self.api_base, path);
        debug!("POST {} ({})", url, operation);
        let request = self.http.post(&url).header(
            "Authorization",
            build_user_context_header(&self.credentials.access_token),
        );
        let body = send_checked(request, operation).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return format!("{}{}", self.api_base, path);
        }
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}{}?{}", self.api_base, path, query.join("&"))
    }
}

/// Sends a request and returns the response body, mapping any non-success
/// status to an API error that preserves the raw body for diagnostics.
async fn send_checked(request: reqwest::RequestBuilder, operation: &str) -> Result<String> {
    let response = request.send().await?;
    let status = response.status();
    debug!("Received {} for operation '{}'", status, operation);

    if status.is_success() {
        let body = response.text().await?;
        debug!(
            "Operation '{}' completed: {} bytes received",
            operation,
            body.len()
        );
        Ok(body)
    } else {
        let body = response.text().await?;
        error!("Operation '{}' failed with status {}", operation, status);
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}
