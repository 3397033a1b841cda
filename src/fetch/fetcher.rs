//! HTTP fetcher implementation
//!
//! This module handles the single GET request made per candidate URL:
//! - Building the HTTP client with the configured user agent and timeout
//! - Following redirects and reporting the final URL
//! - Classifying transport failures (timeout, connection, other)

use crate::config::FetcherConfig;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Response metadata and body returned by a [`Fetcher`]
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code of the last response in the redirect chain
    pub status: u16,

    /// Response headers (case-insensitive lookup)
    pub headers: HeaderMap,

    /// URL of the last request, when the transport reports one
    pub final_url: Option<String>,

    /// Decoded response body
    pub body: String,
}

impl FetchResponse {
    /// Returns the `Content-Type` header value, if present and valid text
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}

/// Capability to GET a URL with redirects followed and a bounded timeout
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, returning the final response or a transport failure
    ///
    /// Non-2xx statuses are not errors at this level; callers inspect
    /// [`FetchResponse::status`].
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use logo_scout::config::FetcherConfig;
/// use logo_scout::fetch::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, &e))?;

        let status = response.status().as_u16();
        let final_url = Some(response.url().to_string());
        let headers = response.headers().clone();

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(url, &e))?;

        Ok(FetchResponse {
            status,
            headers,
            final_url,
            body,
        })
    }
}

/// Maps a reqwest error onto the transport failure kinds
fn classify_error(url: &str, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
