//! Crawler module for sitemap discovery and page processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-call timeouts
//! - Sitemap discovery and sitemap tree resolution
//! - HTML metadata extraction
//! - Bounded concurrent scheduling of page extractions
//! - Overall crawl orchestration

mod extractor;
mod fetcher;
mod locator;
mod parser;
mod pipeline;
mod resolver;
mod scheduler;
mod sitemap;

pub use extractor::MetadataExtractor;
pub use fetcher::{build_http_client, fetch_url, probe_url, FetchResult};
pub use locator::{candidate_urls, SitemapLocator, SITEMAP_CANDIDATES};
pub use parser::{parse_html, ParsedPage};
pub use pipeline::{CancelHandle, CrawlEvent, CrawlPipeline, ProgressEvent, EVENT_BUFFER};
pub use resolver::{Resolution, ResolveStats, SitemapResolver, UrlSet};
pub use scheduler::{CompletedPage, QueuedUrl, Scheduler};
pub use sitemap::{parse_sitemap, SitemapKind, SitemapNode};

use crate::config::Config;
use crate::filter::SearchTerms;
use crate::output::CrawlReport;
use crate::SieveError;
use tokio::sync::mpsc;

/// Runs a complete crawl, discarding progress events
///
/// This is the simplest entry point. It will:
/// 1. Locate the sitemap of `website`
/// 2. Resolve every page URL it lists
/// 3. Extract metadata from each page
/// 4. Keep the pages mentioning any of `terms`
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `website` - Website URL, scheme optional
/// * `terms` - Search terms
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(SieveError)` - Crawl failed
///
/// # Example
///
/// ```no_run
/// use seo_sieve::config::Config;
/// use seo_sieve::crawler::crawl;
/// use seo_sieve::SearchTerms;
///
/// # async fn example() -> Result<(), seo_sieve::SieveError> {
/// let report = crawl(Config::default(), "example.com", &SearchTerms::parse("2025, AI")).await?;
/// println!("{} matches", report.match_count());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    config: Config,
    website: &str,
    terms: &SearchTerms,
) -> Result<CrawlReport, SieveError> {
    let pipeline = CrawlPipeline::new(config)?;
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
    let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });

    let result = pipeline.run(website, terms, tx).await;
    let _ = drain.await;
    result
}
