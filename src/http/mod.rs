//! Blocking HTTP transport used by the card pipelines.
//!
//! Pipelines only see the [`HttpClient`] trait so tests can substitute a
//! canned client. [`ReqwestClient`] is the production implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

use crate::error::{CardError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "stat-cards (profile card generator)";

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    fn get(&self, url: &str) -> Result<String>;

    /// POST a JSON document and return the response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    fn post_json(&self, url: &str, body: &str) -> Result<String>;
}

/// Per-client request settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: Option<String>,
    /// Sent as `Authorization: Bearer ...` when present.
    pub bearer_token: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: None,
            bearer_token: None,
        }
    }
}

impl HttpOptions {
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Attach a bearer credential. Blank tokens are ignored.
    #[must_use]
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so most of it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    options: HttpOptions,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(options: HttpOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| CardError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, options })
    }

    fn prepare(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        let mut request = request.header(USER_AGENT, &self.options.user_agent);
        if let Some(accept) = &self.options.accept {
            request = request.header(ACCEPT, accept);
        }
        if let Some(token) = &self.options.bearer_token {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[cfg(not(tarpaulin_include))]
fn send(url: &str, request: reqwest::blocking::RequestBuilder) -> Result<String> {
    log::debug!("HTTP request: {url}");
    let response = request.send().map_err(|e| {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            "failed to connect".to_string()
        } else {
            e.to_string()
        };
        CardError::Transport {
            url: url.to_string(),
            message,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CardError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| CardError::Transport {
        url: url.to_string(),
        message: format!("failed to read response body: {e}"),
    })
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        send(url, self.prepare(self.client.get(url)))
    }

    fn post_json(&self, url: &str, body: &str) -> Result<String> {
        let request = self
            .prepare(self.client.post(url))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        send(url, request)
    }
}

#[cfg(test)]
pub mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
