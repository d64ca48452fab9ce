//! Per-page SEO metadata extraction

use crate::config::CrawlerConfig;
use crate::crawler::{fetch_url, parse_html, FetchResult};
use crate::record::{PageRecord, PageStatus};
use reqwest::Client;
use std::time::Duration;

/// Fetches a page and turns it into a [`PageRecord`]
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    client: Client,
    timeout: Duration,
}

impl MetadataExtractor {
    pub fn new(client: Client, config: &CrawlerConfig) -> Self {
        Self {
            client,
            timeout: config.page_timeout(),
        }
    }

    /// Extracts title, meta description and first h1 of a page
    ///
    /// Never fails. Transport problems and non-200 answers are encoded in the
    /// record's status, with every content field absent.
    pub async fn extract(&self, url: &str) -> PageRecord {
        match fetch_url(&self.client, url, self.timeout).await {
            FetchResult::Success { body, .. } => {
                let parsed = parse_html(&body);
                PageRecord {
                    url: url.to_string(),
                    title: parsed.title,
                    description: parsed.description,
                    h1: parsed.h1,
                    status: PageStatus::Success,
                }
            }
            FetchResult::HttpError { status_code } => {
                tracing::debug!("{} returned HTTP {}", url, status_code);
                PageRecord::without_content(url, PageStatus::HttpError(status_code))
            }
            FetchResult::NetworkError { error } => {
                tracing::debug!("Failed to fetch {}: {}", url, error);
                PageRecord::without_content(url, PageStatus::ScraperError(error))
            }
        }
    }
}
