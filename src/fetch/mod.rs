//! Homepage fetching
//!
//! This module contains everything between a bare domain and the HTML of
//! its homepage:
//! - The [`Fetcher`] contract and its reqwest-backed [`HttpFetcher`]
//! - The [`SiteResolver`], which walks the HTTPS/HTTP candidate list

mod fetcher;
mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use fetcher::{build_http_client, FetchResponse, Fetcher, HttpFetcher};
pub use resolver::{candidate_urls, is_html_content_type, FetchResult, SiteResolver};
