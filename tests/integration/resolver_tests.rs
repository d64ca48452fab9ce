use crate::support::{mount_get, mount_status, sitemap_index, test_config, urlset};
use seo_sieve::crawler::{build_http_client, SitemapResolver};
use wiremock::MockServer;

fn create_resolver(max_sitemaps: u32) -> SitemapResolver {
    let mut config = test_config();
    config.crawler.max_sitemaps = max_sitemaps;
    let client = build_http_client(&config.user_agent).unwrap();
    SitemapResolver::new(client, &config.crawler)
}

fn page_urls(base: &str, paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| format!("{}{}", base, p)).collect()
}

#[tokio::test]
async fn test_index_union_in_discovery_order() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(
        &server,
        "/sitemap_index.xml",
        sitemap_index(&page_urls(&base, &["/posts.xml", "/pages.xml"])),
        "application/xml",
    )
    .await;
    mount_get(
        &server,
        "/posts.xml",
        urlset(&page_urls(&base, &["/p1", "/p2", "/shared"])),
        "application/xml",
    )
    .await;
    mount_get(
        &server,
        "/pages.xml",
        urlset(&page_urls(&base, &["/shared", "/about", "/contact"])),
        "application/xml",
    )
    .await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/sitemap_index.xml", base))
        .await;

    assert_eq!(
        resolution.urls.as_slice(),
        page_urls(&base, &["/p1", "/p2", "/shared", "/about", "/contact"]).as_slice()
    );
    assert_eq!(resolution.stats.fetched, 3);
    assert_eq!(resolution.stats.failed, 0);
}

#[tokio::test]
async fn test_duplicate_locs_once() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_get(
        &server,
        "/sitemap.xml",
        urlset(&page_urls(&base, &["/a", "/b", "/a", "/b", "/a"])),
        "application/xml",
    )
    .await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/sitemap.xml", base))
        .await;

    assert_eq!(resolution.urls.len(), 2);
}

#[tokio::test]
async fn test_self_referencing_index_terminates() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Root lists itself and a child; the child points back at the root
    mount_get(
        &server,
        "/sitemap.xml",
        sitemap_index(&page_urls(&base, &["/sitemap.xml", "/child.xml"])),
        "application/xml",
    )
    .await;
    mount_get(
        &server,
        "/child.xml",
        sitemap_index(&page_urls(&base, &["/sitemap.xml", "/leaf.xml"])),
        "application/xml",
    )
    .await;
    mount_get(
        &server,
        "/leaf.xml",
        urlset(&page_urls(&base, &["/only-page"])),
        "application/xml",
    )
    .await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/sitemap.xml", base))
        .await;

    assert_eq!(
        resolution.urls.as_slice(),
        page_urls(&base, &["/only-page"]).as_slice()
    );
    assert_eq!(resolution.stats.fetched, 3);
    assert_eq!(resolution.stats.skipped_duplicates, 2);
}

#[tokio::test]
async fn test_failed_branch_does_not_abort_siblings() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(
        &server,
        "/sitemap.xml",
        sitemap_index(&page_urls(&base, &["/broken.xml", "/good.xml"])),
        "application/xml",
    )
    .await;
    mount_status(&server, "/broken.xml", 500).await;
    mount_get(
        &server,
        "/good.xml",
        urlset(&page_urls(&base, &["/kept"])),
        "application/xml",
    )
    .await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/sitemap.xml", base))
        .await;

    assert_eq!(
        resolution.urls.as_slice(),
        page_urls(&base, &["/kept"]).as_slice()
    );
    assert_eq!(resolution.stats.failed, 1);
}

#[tokio::test]
async fn test_sitemap_limit() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(
        &server,
        "/sitemap.xml",
        sitemap_index(&page_urls(&base, &["/one.xml", "/two.xml", "/three.xml"])),
        "application/xml",
    )
    .await;
    for (route, page) in [("/one.xml", "/1"), ("/two.xml", "/2"), ("/three.xml", "/3")] {
        mount_get(
            &server,
            route,
            urlset(&page_urls(&base, &[page])),
            "application/xml",
        )
        .await;
    }

    let resolution = create_resolver(2)
        .resolve(&format!("{}/sitemap.xml", base))
        .await;

    assert_eq!(
        resolution.urls.as_slice(),
        page_urls(&base, &["/1"]).as_slice()
    );
    assert_eq!(resolution.stats.fetched, 2);
    assert_eq!(resolution.stats.skipped_over_limit, 2);
}

#[tokio::test]
async fn test_unreachable_sitemap_is_empty() {
    let server = MockServer::start().await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/missing.xml", server.uri()))
        .await;

    assert!(resolution.urls.is_empty());
    assert_eq!(resolution.stats.failed, 1);
}

#[tokio::test]
async fn test_non_sitemap_document_contributes_nothing() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/sitemap.xml",
        "<html><body>Not a sitemap</body></html>".to_string(),
        "text/html",
    )
    .await;

    let resolution = create_resolver(500)
        .resolve(&format!("{}/sitemap.xml", server.uri()))
        .await;

    assert!(resolution.urls.is_empty());
    assert_eq!(resolution.stats.fetched, 1);
}
