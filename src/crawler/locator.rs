//! Sitemap discovery
//!
//! A site's sitemap is looked up in two steps:
//! - the first `Sitemap:` directive in robots.txt
//! - otherwise a HEAD probe of well-known paths, first HTTP 200 wins

use crate::config::CrawlerConfig;
use crate::crawler::probe_url;
use crate::robots::fetch_robots;
use crate::url::{join_origin, origin_of, resolve_reference};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Well-known sitemap paths, probed in this order
pub const SITEMAP_CANDIDATES: [&str; 4] = [
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap.php",
    "/sitemap/sitemap.xml",
];

/// Finds the sitemap of a website
#[derive(Debug, Clone)]
pub struct SitemapLocator {
    client: Client,
    timeout: Duration,
}

impl SitemapLocator {
    /// Creates a locator using the robots timeout for every request it makes
    pub fn new(client: Client, config: &CrawlerConfig) -> Self {
        Self {
            client,
            timeout: config.robots_timeout(),
        }
    }

    /// Locates the sitemap for a normalized website URL
    ///
    /// # Returns
    ///
    /// * `Some(String)` - Absolute URL of the sitemap
    /// * `None` - Neither robots.txt nor any well-known path yielded one
    pub async fn locate(&self, website: &Url) -> Option<String> {
        let origin = origin_of(website);

        if let Some(robots) = fetch_robots(&self.client, &origin, self.timeout).await {
            if let Some(declared) = robots.first_sitemap() {
                match resolve_reference(&origin, declared) {
                    Some(sitemap) => {
                        tracing::info!("Sitemap declared in robots.txt: {}", sitemap);
                        return Some(sitemap);
                    }
                    None => tracing::warn!(
                        "Ignoring unusable Sitemap directive in robots.txt: {}",
                        declared
                    ),
                }
            } else {
                tracing::info!("robots.txt declares no sitemap, proceeding to fallbacks");
            }
        }

        for candidate in candidate_urls(&origin) {
            match probe_url(&self.client, &candidate, self.timeout).await {
                Some(200) => {
                    tracing::info!("Sitemap found at fallback location {}", candidate);
                    return Some(candidate);
                }
                Some(status) => tracing::debug!("{} answered HTTP {}", candidate, status),
                None => {}
            }
        }

        tracing::warn!("No sitemap found for {}", origin);
        None
    }
}

/// Absolute fallback sitemap URLs for an origin, in probe order
pub fn candidate_urls(origin: &str) -> Vec<String> {
    SITEMAP_CANDIDATES
        .iter()
        .map(|path| join_origin(origin, path))
        .collect()
}
