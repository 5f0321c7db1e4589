//! Blocking JSON-over-HTTP client shared by the feed adapters.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::config::normalize_base_url;
use crate::domain::{AppError, FeedError};

const MAX_BODY_CHARS: usize = 512;

/// HTTP transport for a JSON API rooted at a base URL.
///
/// Performs a single request per call; there is no retry.
#[derive(Debug, Clone)]
pub struct JsonFeedClient {
    base_url: Url,
    client: Client,
}

impl JsonFeedClient {
    /// Create a client for the API at `base_url`, with requests bounded by `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: normalize_base_url(base_url), client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` relative to the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, FeedError> {
        self.base_url.join(path).map_err(|e| FeedError::Response {
            uri: format!("{}{}", self.base_url, path),
            details: e.to_string(),
        })
    }

    /// GET `url` and decode the JSON body into `T`.
    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FeedError> {
        let uri = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FeedError::Response { uri: uri.clone(), details: error_chain(&e) })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FeedError::Response { uri: uri.clone(), details: error_chain(&e) })?;

        if !status.is_success() {
            return Err(FeedError::Response { uri, details: status_details(status, &body) });
        }

        serde_json::from_str(&body)
            .map_err(|e| FeedError::Deserialize { uri, details: e.to_string() })
    }
}

/// Messages of `error` and each of its sources, one per line.
fn error_chain(error: &dyn StdError) -> String {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(inner) = source {
        messages.push(inner.to_string());
        source = inner.source();
    }
    messages.join("\n")
}

fn status_details(status: StatusCode, body: &str) -> String {
    let mut details = format!("HTTP status {}", status);
    let body = body.trim();
    if !body.is_empty() {
        let snippet: String = body.chars().take(MAX_BODY_CHARS).collect();
        details.push('\n');
        details.push_str(&snippet);
    }
    details
}
