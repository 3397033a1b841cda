//! Integration tests for the fetch-and-rank pipeline
//!
//! These tests use wiremock to stand up plain-HTTP servers, so every HTTPS
//! candidate fails at the TLS layer and the HTTP fallback is exercised
//! against a real socket.

use logo_scout::config::FetcherConfig;
use logo_scout::fetch::{Fetcher, HttpFetcher, SiteResolver};
use logo_scout::output::Outcome;
use logo_scout::{process_domain, run_batch, FetchError, LogoError};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a fetcher with a short timeout suitable for tests
fn test_fetcher(timeout_ms: u64) -> Arc<HttpFetcher> {
    let config = FetcherConfig {
        timeout_ms,
        ..FetcherConfig::default()
    };
    Arc::new(HttpFetcher::new(&config).expect("Failed to build fetcher"))
}

/// Returns the `host:port` a mock server listens on, used as the input domain
fn domain_of(server: &MockServer) -> String {
    server.address().to_string()
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_http_fallback_finds_logo() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        r#"<html><body>
        <img src="/static/hero.jpg">
        <img src="/static/logo.png" alt="Acme">
        </body></html>"#,
    )
    .await;

    let resolver = SiteResolver::new(test_fetcher(2000));

    let page = resolver.resolve(&domain).await.expect("Resolve failed");
    assert_eq!(page.base_url, format!("http://{}/", domain));

    let record = process_domain(&resolver, &domain).await;
    assert_eq!(
        record.to_csv_line(),
        format!("{0},http://{0}//static/logo.png", domain)
    );
}

#[tokio::test]
async fn test_redirect_updates_base_url() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/en/"))
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/en/",
        r#"<header><img class="logo" src="brand.svg"></header>"#,
    )
    .await;

    let resolver = SiteResolver::new(test_fetcher(2000));
    let record = process_domain(&resolver, &domain).await;

    assert_eq!(
        record.outcome,
        Outcome::Found(format!("http://{}/en/brand.svg", domain))
    );
}

#[tokio::test]
async fn test_non_html_response_is_rejected() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let resolver = SiteResolver::new(test_fetcher(2000));

    match resolver.resolve(&domain).await {
        Err(LogoError::Unreachable { last, .. }) => {
            assert!(matches!(*last, LogoError::NotHtml { .. }), "got {last:?}");
        }
        other => panic!("Expected Unreachable, got {:?}", other),
    }

    let record = process_domain(&resolver, &domain).await;
    assert_eq!(record.to_csv_line(), format!("{},", domain));
}

#[tokio::test]
async fn test_server_error_reports_http_status() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let resolver = SiteResolver::new(test_fetcher(2000));

    match resolver.resolve(&domain).await {
        Err(LogoError::Unreachable { last, .. }) => {
            assert!(
                matches!(*last, LogoError::NotOk { status: 500, .. }),
                "got {last:?}"
            );
        }
        other => panic!("Expected Unreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<img src=\"logo.png\">", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(200);
    let url = format!("{}/", mock_server.uri());

    let result = fetcher.fetch(&url).await;
    assert_eq!(result.unwrap_err(), FetchError::Timeout { url });
}

#[tokio::test]
async fn test_fetcher_reports_final_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/home"))
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/home", "<p>home</p>").await;

    let response = test_fetcher(2000)
        .fetch(&format!("{}/", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(response.status, 200);
    assert_eq!(
        response.final_url,
        Some(format!("{}/home", mock_server.uri()))
    );
    assert!(response
        .content_type()
        .is_some_and(|ct| ct.starts_with("text/html")));
    assert_eq!(response.body, "<p>home</p>");
}

#[tokio::test]
async fn test_batch_end_to_end() {
    let with_logo = MockServer::start().await;
    let without_logo = MockServer::start().await;

    mount_html(
        &with_logo,
        "/",
        r#"<img src="//cdn.example.com/a.png"><img src="https://cdn.example.com/logo.png" alt="">"#,
    )
    .await;
    mount_html(&without_logo, "/", "<p>text only</p>").await;

    let domains = vec![
        domain_of(&with_logo),
        domain_of(&without_logo),
        "127.0.0.1:1".to_string(),
    ];

    let mut buffer = Vec::new();
    let summary = run_batch(test_fetcher(2000), &domains, 20, &mut buffer)
        .await
        .expect("Batch failed");

    let output = String::from_utf8(buffer).expect("Output is not UTF-8");
    let mut lines: Vec<&str> = output.lines().collect();
    lines.sort();

    let mut expected = vec![
        format!("{},https://cdn.example.com/logo.png", domains[0]),
        format!("{},", domains[1]),
        "127.0.0.1:1,".to_string(),
    ];
    expected.sort();

    assert_eq!(lines, expected);
    assert!(output.ends_with('\n'));
    assert_eq!(summary.total, 3);
    assert_eq!(summary.found, 1);
    assert_eq!(summary.not_found, 1);
    assert_eq!(summary.failed, 1);
}
