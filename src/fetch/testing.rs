//! Scripted [`Fetcher`] used by unit tests

use crate::fetch::{FetchResponse, Fetcher};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Lifecycle event of a single fetch call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    Start(String),
    End(String),
}

struct Scripted {
    result: Result<FetchResponse, FetchError>,
    delay: Duration,
}

/// Fetcher answering from a fixed URL table
///
/// Unknown URLs fail with a connection error. Every call is recorded, along
/// with the peak number of calls in flight at once.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Scripted>,
    events: Mutex<Vec<FetchEvent>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, result: Result<FetchResponse, FetchError>) -> Self {
        self.respond_after(url, Duration::ZERO, result)
    }

    pub fn respond_after(
        mut self,
        url: &str,
        delay: Duration,
        result: Result<FetchResponse, FetchError>,
    ) -> Self {
        self.responses
            .insert(url.to_string(), Scripted { result, delay });
        self
    }

    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FetchEvent::Start(url) => Some(url),
                FetchEvent::End(_) => None,
            })
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.events
            .lock()
            .unwrap()
            .push(FetchEvent::Start(url.to_string()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let (result, delay) = match self.responses.get(url) {
            Some(scripted) => (scripted.result.clone(), scripted.delay),
            None => (
                Err(FetchError::Connect {
                    url: url.to_string(),
                    message: "connection refused".to_string(),
                }),
                Duration::ZERO,
            ),
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.events
            .lock()
            .unwrap()
            .push(FetchEvent::End(url.to_string()));
        result
    }
}

/// Builds a response with the given status, content type and body
pub fn response(status: u16, content_type: Option<&'static str>, body: &str) -> FetchResponse {
    let mut headers = HeaderMap::new();
    if let Some(content_type) = content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    FetchResponse {
        status,
        headers,
        final_url: None,
        body: body.to_string(),
    }
}

/// Builds a 200 `text/html` response
pub fn html(body: &str) -> FetchResponse {
    response(200, Some("text/html; charset=utf-8"), body)
}
