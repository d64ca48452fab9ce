use seo_sieve::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Default configuration with short timeouts for testing
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.crawler.concurrency = 4;
    config.crawler.robots_timeout_secs = 2;
    config.crawler.sitemap_timeout_secs = 2;
    config.crawler.page_timeout_secs = 2;
    config
}

/// Serves `body` with a 200 for GET requests to `route`
pub async fn mount_get(server: &MockServer, route: &str, body: String, content_type: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, content_type))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn urlset(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|url| format!("  <url><loc>{}</loc></url>\n", url))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>",
        entries
    )
}

pub fn sitemap_index(sitemaps: &[String]) -> String {
    let entries: String = sitemaps
        .iter()
        .map(|url| format!("  <sitemap><loc>{}</loc></sitemap>\n", url))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</sitemapindex>",
        entries
    )
}

pub fn html_page(title: &str, description: &str, h1: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{}</title><meta name=\"description\" content=\"{}\"></head><body><h1>{}</h1><p>Body</p></body></html>",
        title, description, h1
    )
}
