//! Crawl pipeline - main orchestration logic
//!
//! Drives one run through its phases:
//! - Validating the website input
//! - Locating the sitemap
//! - Resolving the sitemap tree into page URLs
//! - Extracting and filtering every page on the worker pool
//!
//! Progress is streamed to the caller as [`CrawlEvent`]s over a tokio mpsc
//! channel; the pipeline knows nothing about how they are displayed.

use crate::config::Config;
use crate::crawler::resolver::ResolveStats;
use crate::crawler::scheduler::{QueuedUrl, Scheduler};
use crate::crawler::{build_http_client, MetadataExtractor, SitemapLocator, SitemapResolver};
use crate::filter::{highlights, matches, MatchOutcome, SearchTerms};
use crate::output::CrawlReport;
use crate::record::PageRecord;
use crate::state::{CrawlRun, CrawlState};
use crate::url::normalize_website_url;
use crate::SieveError;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Capacity of the event channel created by [`CrawlPipeline::spawn`]
pub const EVENT_BUFFER: usize = 256;

/// Progress after one processed page
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// 1-based discovery position of the page
    pub index: usize,

    /// Number of URLs resolved from the sitemap
    pub total: usize,

    pub record: PageRecord,
    pub matched: bool,
    pub outcome: MatchOutcome,

    /// Per-column highlight flags (URL, Title, Description, H1, Status)
    pub highlights: [bool; 5],

    /// Pages processed so far, including this one
    pub scanned: usize,

    /// Matches found so far, including this one
    pub matches_found: usize,
}

/// Events emitted while a run progresses
#[derive(Debug, Clone)]
pub enum CrawlEvent {
    StateChanged(CrawlState),
    SitemapFound(String),
    UrlsResolved { total: usize, stats: ResolveStats },
    PageProcessed(ProgressEvent),
    Completed(CrawlReport),
}

/// Shared flag used to stop a run early
///
/// Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for CancelHandle {
    fn default() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; idempotent
    pub fn cancel(&self) {
        // Cannot fail: self.rx keeps the channel open
        let _ = self.tx.send(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation has been requested
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Orchestrates a complete crawl run
pub struct CrawlPipeline {
    config: Config,
    client: Client,
    cancel: CancelHandle,
}

impl CrawlPipeline {
    /// Creates a pipeline with its own HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlPipeline)` - Ready to run
    /// * `Err(SieveError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, SieveError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self {
            config,
            client,
            cancel: CancelHandle::new(),
        })
    }

    /// Handle that stops this pipeline's runs when cancelled
    ///
    /// Cancellation is permanent: the run in progress and every later run
    /// end in [`CrawlState::Cancelled`].
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Runs the pipeline on a background task
    ///
    /// Returns the event receiver and the task handle. Dropping the receiver
    /// cancels the run.
    pub fn spawn(
        self,
        website: impl Into<String>,
        terms: SearchTerms,
    ) -> (
        mpsc::Receiver<CrawlEvent>,
        JoinHandle<Result<CrawlReport, SieveError>>,
    ) {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let website = website.into();
        let handle = tokio::spawn(async move { self.run(&website, &terms, tx).await });
        (rx, handle)
    }

    /// Runs one crawl from website input to report
    ///
    /// The caller must keep draining `events`; a full channel applies back
    /// pressure to the run and a closed one cancels it. A closed channel only
    /// cancels this run: the pipeline can run again afterwards.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The run completed or was cancelled
    /// * `Err(SieveError::InvalidInput)` - The website URL is unusable
    /// * `Err(SieveError::SitemapNotFound)` - No sitemap could be located
    /// * `Err(SieveError::NoUrlsFound)` - The sitemap tree lists no pages
    pub async fn run(
        &self,
        website: &str,
        terms: &SearchTerms,
        events: mpsc::Sender<CrawlEvent>,
    ) -> Result<CrawlReport, SieveError> {
        let site = normalize_website_url(website)
            .map_err(|e| SieveError::InvalidInput(format!("{} ({})", website.trim(), e)))?;

        let mut run = CrawlRun::new(site.as_str(), terms.clone());
        let scope = RunScope::new(self.cancel.clone(), events);
        tracing::info!("Starting crawl of {} for terms [{}]", site, terms);

        // Sitemap discovery
        scope.advance(&mut run, CrawlState::LocatingSitemap).await?;
        let locator = SitemapLocator::new(self.client.clone(), &self.config.crawler);
        let sitemap = match scope.until_cancelled(locator.locate(&site)).await {
            None => return scope.finish_cancelled(run).await,
            Some(Some(sitemap)) => sitemap,
            Some(None) => {
                scope.advance(&mut run, CrawlState::SitemapNotFound).await?;
                return Err(SieveError::SitemapNotFound {
                    site: site.to_string(),
                });
            }
        };
        run.set_sitemap(sitemap.as_str());
        scope.emit(CrawlEvent::SitemapFound(sitemap.clone())).await;

        // URL resolution
        scope.advance(&mut run, CrawlState::ResolvingUrls).await?;
        let resolver = SitemapResolver::new(self.client.clone(), &self.config.crawler);
        let resolution = match scope.until_cancelled(resolver.resolve(&sitemap)).await {
            Some(resolution) => resolution,
            None => return scope.finish_cancelled(run).await,
        };
        if resolution.urls.is_empty() {
            scope.advance(&mut run, CrawlState::NoUrlsFound).await?;
            return Err(SieveError::NoUrlsFound { sitemap });
        }

        let total = resolution.urls.len();
        run.set_resolution(total, resolution.stats);
        scope
            .emit(CrawlEvent::UrlsResolved {
                total,
                stats: resolution.stats,
            })
            .await;

        // Extraction and filtering
        scope.advance(&mut run, CrawlState::Processing).await?;
        let queue = resolution
            .urls
            .into_vec()
            .into_iter()
            .enumerate()
            .map(|(i, url)| QueuedUrl { index: i + 1, url })
            .collect();
        let extractor = MetadataExtractor::new(self.client.clone(), &self.config.crawler);
        let mut scheduler = Scheduler::new(
            extractor,
            queue,
            self.config.crawler.concurrency as usize,
        );

        loop {
            let page = tokio::select! {
                biased;
                _ = scope.cancelled() => {
                    tracing::info!(
                        "Crawl cancelled with {} URLs unprocessed",
                        scheduler.remaining()
                    );
                    scheduler.abort();
                    return scope.finish_cancelled(run).await;
                }
                page = scheduler.next_completed() => page,
            };

            let page = match page {
                Some(page) => page,
                None => break,
            };

            let outcome = matches(&page.record, terms);
            let matched = outcome.is_match();
            run.record_page(page.index, &page.record, matched);

            if matched {
                tracing::info!("Match: {} ({:?})", page.record.url, outcome.fields());
            }

            let progress = ProgressEvent {
                index: page.index,
                total,
                highlights: highlights(&page.record, terms),
                record: page.record,
                matched,
                outcome,
                scanned: run.scanned(),
                matches_found: run.matches_found(),
            };
            scope.emit(CrawlEvent::PageProcessed(progress)).await;
        }

        scope.advance(&mut run, CrawlState::Completed).await?;
        let report = run.into_report();
        tracing::info!(
            "Crawl completed: {} pages scanned, {} matches",
            report.scanned,
            report.match_count()
        );
        scope.emit(CrawlEvent::Completed(report.clone())).await;

        Ok(report)
    }
}

/// Cancellation and event delivery for a single run
///
/// The run stops when either the pipeline handle or its own handle is
/// cancelled. Losing the event receiver cancels only the run's own handle.
struct RunScope {
    pipeline: CancelHandle,
    local: CancelHandle,
    events: mpsc::Sender<CrawlEvent>,
}

impl RunScope {
    fn new(pipeline: CancelHandle, events: mpsc::Sender<CrawlEvent>) -> Self {
        Self {
            pipeline,
            local: CancelHandle::new(),
            events,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.pipeline.is_cancelled() || self.local.is_cancelled()
    }

    async fn cancelled(&self) {
        tokio::select! {
            _ = self.pipeline.cancelled() => {}
            _ = self.local.cancelled() => {}
        }
    }

    /// Transitions the run and announces the new state
    async fn advance(&self, run: &mut CrawlRun, next: CrawlState) -> Result<(), SieveError> {
        run.transition(next)?;
        self.emit(CrawlEvent::StateChanged(next)).await;
        Ok(())
    }

    /// Sends an event; a closed channel cancels the run
    async fn emit(&self, event: CrawlEvent) {
        if self.events.send(event).await.is_err() && !self.is_cancelled() {
            tracing::info!("Event receiver dropped, cancelling crawl");
            self.local.cancel();
        }
    }

    /// Awaits `future` unless cancellation comes first
    async fn until_cancelled<F: Future>(&self, future: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = future => Some(output),
        }
    }

    async fn finish_cancelled(&self, mut run: CrawlRun) -> Result<CrawlReport, SieveError> {
        self.advance(&mut run, CrawlState::Cancelled).await?;
        let report = run.into_report();
        tracing::warn!(
            "Crawl cancelled after {} of {} pages",
            report.scanned,
            report.total_urls
        );
        Ok(report)
    }
}
