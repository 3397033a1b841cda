//! Site resolution: from a bare domain to a usable HTML homepage
//!
//! Candidates are tried in strict order (`https://{domain}/`, then
//! `http://{domain}/`). A candidate fails when the transport errors, the
//! status is outside 200..=299, or the content type does not mention `/html`.
//! When every candidate fails, the failure of the *last* one is reported.

use crate::fetch::Fetcher;
use crate::url::effective_base_url;
use crate::LogoError;
use std::sync::Arc;

/// A homepage that passed the status and content-type checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// `scheme://host/path` of the page actually served
    pub base_url: String,

    /// Raw HTML text
    pub body: String,
}

/// Returns the candidate base URLs for `domain`, in the order they are tried
pub fn candidate_urls(domain: &str) -> [String; 2] {
    [format!("https://{}/", domain), format!("http://{}/", domain)]
}

/// Returns true if a `Content-Type` value indicates an HTML payload
///
/// This is a case-insensitive substring test for `/html`, so values such as
/// `application/xhtml+xml` are rejected while `text/html;charset=utf-8` and
/// any header merely containing `/html` are accepted.
pub fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.to_ascii_lowercase().contains("/html"))
        .unwrap_or(false)
}

/// Resolves domains to their homepage using an injected [`Fetcher`]
#[derive(Clone)]
pub struct SiteResolver {
    fetcher: Arc<dyn Fetcher>,
}

impl SiteResolver {
    /// Creates a resolver that issues requests through `fetcher`
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches the homepage of `domain`, falling back from HTTPS to HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(FetchResult)` - The first candidate that yielded HTML
    /// * `Err(LogoError::Unreachable)` - Every candidate failed; wraps the
    ///   HTTP candidate's failure
    pub async fn resolve(&self, domain: &str) -> Result<FetchResult, LogoError> {
        let [https, http] = candidate_urls(domain);

        match self.try_candidate(&https).await {
            Ok(result) => return Ok(result),
            Err(e) => tracing::debug!("Candidate {} failed, falling back: {}", https, e),
        }

        self.try_candidate(&http).await.map_err(|e| {
            tracing::debug!("Candidate {} failed: {}", http, e);
            LogoError::Unreachable {
                domain: domain.to_string(),
                last: Box::new(e),
            }
        })
    }

    /// Fetches one candidate URL and applies the status and content checks
    async fn try_candidate(&self, url: &str) -> Result<FetchResult, LogoError> {
        let response = self.fetcher.fetch(url).await?;

        if !(200..=299).contains(&response.status) {
            return Err(LogoError::NotOk {
                url: url.to_string(),
                status: response.status,
            });
        }

        if !is_html_content_type(response.content_type()) {
            return Err(LogoError::NotHtml {
                url: url.to_string(),
                content_type: response.content_type().unwrap_or_default().to_string(),
            });
        }

        let base_url = effective_base_url(url, response.final_url.as_deref());

        Ok(FetchResult {
            base_url,
            body: response.body,
        })
    }
}
