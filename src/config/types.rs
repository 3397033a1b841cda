use serde::Deserialize;

/// User agent sent with every homepage request
pub const DEFAULT_USER_AGENT: &str = "curl/7.79.0";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Redirect hops followed before the request fails
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Number of domains processed concurrently per window
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Main configuration structure for Logo-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Value of the `User-Agent` request header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Maximum number of redirects to follow
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Batch orchestration configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Domains launched together; the next window starts once all finish
    #[serde(rename = "window-size")]
    pub window_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}
