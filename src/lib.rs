//! Logo-Scout: logotype discovery for websites
//!
//! This crate fetches a site's homepage (HTTPS first, then HTTP), scans the
//! markup for image tags and picks the most logo-like one, producing a
//! `domain,logo_url` CSV line per input domain.

pub mod batch;
pub mod config;
pub mod fetch;
pub mod html;
pub mod logo;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Logo-Scout operations
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Non-2xx status {status} from {url}")]
    NotOk { url: String, status: u16 },

    #[error("Response from {url} is not HTML (content-type: {content_type:?})")]
    NotHtml { url: String, content_type: String },

    #[error("No candidate URL reachable for {domain}: {last}")]
    Unreachable {
        domain: String,
        #[source]
        last: Box<LogoError>,
    },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Transport-level failures reported by a [`fetch::Fetcher`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

/// URL-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Base URL has no scheme separator: {0}")]
    MalformedBase(String),
}

/// Result type alias for Logo-Scout operations
pub type Result<T> = std::result::Result<T, LogoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use batch::{process_domain, read_domains, run_batch};
pub use config::Config;
pub use fetch::{FetchResult, Fetcher, HttpFetcher, SiteResolver};
pub use html::{extract_attribute, extract_image_tags};
pub use logo::pick_logo;
pub use output::{BatchSummary, OutputRecord};
pub use crate::url::to_absolute;
