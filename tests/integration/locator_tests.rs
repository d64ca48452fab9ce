use crate::support::{mount_get, test_config};
use seo_sieve::crawler::{build_http_client, SitemapLocator};
use seo_sieve::url::normalize_website_url;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_locator() -> SitemapLocator {
    let config = test_config();
    let client = build_http_client(&config.user_agent).unwrap();
    SitemapLocator::new(client, &config.crawler)
}

#[tokio::test]
async fn test_robots_directive_is_used() {
    let server = MockServer::start().await;
    let robots = format!(
        "User-agent: *\nDisallow: /admin\nSitemap: {}/custom/Sitemap.xml\n",
        server.uri()
    );
    mount_get(&server, "/robots.txt", robots, "text/plain").await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/custom/Sitemap.xml", server.uri())));
}

#[tokio::test]
async fn test_first_robots_directive_wins() {
    let server = MockServer::start().await;
    let robots = format!(
        "  sitemap: {uri}/first.xml\nSITEMAP: {uri}/second.xml\n",
        uri = server.uri()
    );
    mount_get(&server, "/robots.txt", robots, "text/plain").await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/first.xml", server.uri())));
}

#[tokio::test]
async fn test_relative_robots_directive_resolved_against_origin() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/robots.txt",
        "Sitemap: /maps/main.xml".to_string(),
        "text/plain",
    )
    .await;

    let site = normalize_website_url(&format!("{}/blog/post", server.uri())).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/maps/main.xml", server.uri())));
}

#[tokio::test]
async fn test_fallback_to_well_known_path() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/robots.txt",
        "User-agent: *\nAllow: /".to_string(),
        "text/plain",
    )
    .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/sitemap.xml", server.uri())));
}

#[tokio::test]
async fn test_fallback_probes_in_order() {
    let server = MockServer::start().await;
    // No robots.txt at all; only the third candidate exists
    Mock::given(method("HEAD"))
        .and(path("/sitemap.php"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/sitemap.php", server.uri())));
}

#[tokio::test]
async fn test_no_sitemap_anywhere() {
    let server = MockServer::start().await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_robots_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap_index.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/sitemap_index.xml", server.uri())));
}

#[tokio::test]
async fn test_robots_timeout_falls_back() {
    let server = MockServer::start().await;
    // Slower than the 2s robots timeout of the test config
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("Sitemap: {}/declared.xml", server.uri()))
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    assert_eq!(found, Some(format!("{}/sitemap.xml", server.uri())));
}

#[tokio::test]
async fn test_fallback_head_follows_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("Location", format!("{}/real-sitemap.xml", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/real-sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let site = normalize_website_url(&server.uri()).unwrap();
    let found = create_locator().locate(&site).await;

    // The candidate is reported, not the redirect target
    assert_eq!(found, Some(format!("{}/sitemap.xml", server.uri())));
}
