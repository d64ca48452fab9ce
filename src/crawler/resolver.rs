//! Sitemap tree resolution
//!
//! Expands a sitemap (possibly an index of further sitemaps) into the
//! deduplicated list of page URLs it describes. Traversal is depth first in
//! document order, driven by an explicit worklist so arbitrarily deep or
//! cyclic trees cannot exhaust the call stack.

use crate::config::CrawlerConfig;
use crate::crawler::{fetch_url, parse_sitemap, FetchResult};
use crate::url::sitemap_key;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// Insertion-ordered set of page URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSet {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL, returning false if it was already present
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.urls.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

/// Counters describing one resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Sitemap documents fetched with HTTP 200
    pub fetched: u32,

    /// Sitemap documents that failed (non-200 or network error)
    pub failed: u32,

    /// Sitemap references skipped because they were already visited
    pub skipped_duplicates: u32,

    /// Sitemap references skipped because the document cap was reached
    pub skipped_over_limit: u32,
}

/// Outcome of resolving a sitemap tree
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub urls: UrlSet,
    pub stats: ResolveStats,
}

/// Fetches and expands sitemap trees
#[derive(Debug, Clone)]
pub struct SitemapResolver {
    client: Client,
    timeout: Duration,
    max_sitemaps: u32,
}

impl SitemapResolver {
    pub fn new(client: Client, config: &CrawlerConfig) -> Self {
        Self {
            client,
            timeout: config.sitemap_timeout(),
            max_sitemaps: config.max_sitemaps,
        }
    }

    /// Resolves a sitemap URL into every page URL reachable from it
    ///
    /// Failing branches contribute nothing and never abort their siblings.
    /// The result may be empty; deciding whether that is fatal is up to the
    /// caller.
    pub async fn resolve(&self, sitemap_url: &str) -> Resolution {
        let mut resolution = Resolution::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut worklist: Vec<String> = vec![sitemap_url.to_string()];

        while let Some(current) = worklist.pop() {
            if !visited.insert(sitemap_key(&current)) {
                tracing::debug!("Sitemap already visited: {}", current);
                resolution.stats.skipped_duplicates += 1;
                continue;
            }

            let attempted = resolution.stats.fetched + resolution.stats.failed;
            if attempted >= self.max_sitemaps {
                tracing::warn!(
                    "Sitemap limit of {} reached, skipping {}",
                    self.max_sitemaps,
                    current
                );
                resolution.stats.skipped_over_limit += 1;
                continue;
            }

            let body = match fetch_url(&self.client, &current, self.timeout).await {
                FetchResult::Success { body, .. } => body,
                FetchResult::HttpError { status_code } => {
                    tracing::warn!("Sitemap {} returned HTTP {}", current, status_code);
                    resolution.stats.failed += 1;
                    continue;
                }
                FetchResult::NetworkError { error } => {
                    tracing::warn!("Error fetching sitemap {}: {}", current, error);
                    resolution.stats.failed += 1;
                    continue;
                }
            };
            resolution.stats.fetched += 1;

            let node = parse_sitemap(&body);
            tracing::debug!(
                "Sitemap {} ({:?}): {} child sitemaps, {} urls",
                current,
                node.kind(),
                node.sitemaps.len(),
                node.urls.len()
            );

            for url in node.urls {
                resolution.urls.insert(url);
            }

            // Reversed so the first child is expanded next
            worklist.extend(node.sitemaps.into_iter().rev());
        }

        tracing::info!(
            "Resolved {} unique URLs from {} sitemap(s)",
            resolution.urls.len(),
            resolution.stats.fetched
        );
        resolution
    }
}
