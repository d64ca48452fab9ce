use crate::support::{html_page, mount_get, mount_status, test_config};
use seo_sieve::crawler::{build_http_client, MetadataExtractor};
use seo_sieve::{PageStatus, SearchTerms};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_extractor(page_timeout_secs: u64) -> MetadataExtractor {
    let mut config = test_config();
    config.crawler.page_timeout_secs = page_timeout_secs;
    let client = build_http_client(&config.user_agent).unwrap();
    MetadataExtractor::new(client, &config.crawler)
}

#[tokio::test]
async fn test_extracts_seo_fields() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/post",
        html_page("  AI Trends 2025 ", "What changed this year", "The Big Picture"),
        "text/html",
    )
    .await;

    let url = format!("{}/post", server.uri());
    let record = create_extractor(2).extract(&url).await;

    assert_eq!(record.url, url);
    assert_eq!(record.status, PageStatus::Success);
    assert_eq!(record.title.as_deref(), Some("AI Trends 2025"));
    assert_eq!(record.description.as_deref(), Some("What changed this year"));
    assert_eq!(record.h1.as_deref(), Some("The Big Picture"));
}

#[tokio::test]
async fn test_missing_fields_are_absent() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/bare",
        "<html><body><p>No metadata here</p></body></html>".to_string(),
        "text/html",
    )
    .await;

    let record = create_extractor(2)
        .extract(&format!("{}/bare", server.uri()))
        .await;

    assert_eq!(record.status, PageStatus::Success);
    assert_eq!(record.title, None);
    assert_eq!(record.description, None);
    assert_eq!(record.h1, None);
    assert_eq!(record.title_or_marker(), "N/A");
}

#[tokio::test]
async fn test_not_found_page() {
    let server = MockServer::start().await;
    mount_status(&server, "/gone", 404).await;

    let url = format!("{}/gone", server.uri());
    let record = create_extractor(2).extract(&url).await;

    assert_eq!(record.status, PageStatus::HttpError(404));
    assert_eq!(record.status.to_string(), "Error:404");
    assert_eq!(record.title, None);
    assert_eq!(record.description, None);
    assert_eq!(record.h1, None);

    // Content fields are absent, so only the URL could ever match
    let outcome = seo_sieve::matches(&record, &SearchTerms::parse("gone"));
    assert!(outcome.is_match());
    let outcome = seo_sieve::matches(&record, &SearchTerms::parse("N/A"));
    assert!(!outcome.is_match());
}

#[tokio::test]
async fn test_server_error_page() {
    let server = MockServer::start().await;
    mount_status(&server, "/boom", 503).await;

    let record = create_extractor(2)
        .extract(&format!("{}/boom", server.uri()))
        .await;

    assert_eq!(record.status, PageStatus::HttpError(503));
}

#[tokio::test]
async fn test_timeout_is_scraper_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page("Slow", "", "Slow"), "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let record = create_extractor(1)
        .extract(&format!("{}/slow", server.uri()))
        .await;

    assert_eq!(
        record.status,
        PageStatus::ScraperError("Request timeout".to_string())
    );
    assert_eq!(record.status.to_string(), "scraper_error:Request timeout");
    assert_eq!(record.title, None);
}
