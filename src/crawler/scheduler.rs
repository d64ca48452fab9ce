//! Bounded worker pool for page extraction
//!
//! This module handles:
//! - Keeping at most `concurrency` extractions in flight
//! - Feeding URLs in discovery order
//! - Handing back results in completion order
//! - Turning a lost extraction task into a `Failed` record

use crate::crawler::MetadataExtractor;
use crate::record::{PageRecord, PageStatus};
use std::collections::VecDeque;
use std::future::Future;
use tokio::task::{AbortHandle, JoinSet};

/// A URL waiting for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// 1-based position in discovery order
    pub index: usize,

    pub url: String,
}

/// A finished extraction
#[derive(Debug, Clone)]
pub struct CompletedPage {
    pub index: usize,
    pub record: PageRecord,
}

/// Aborts the wrapped task when dropped
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs one extraction on its own task
///
/// A panicked or cancelled extraction still yields a record, with status
/// `Failed`. Dropping the returned future aborts the extraction.
async fn run_guarded<F>(queued: QueuedUrl, extraction: F) -> CompletedPage
where
    F: Future<Output = PageRecord> + Send + 'static,
{
    let worker = tokio::spawn(extraction);
    let _guard = AbortOnDrop(worker.abort_handle());

    let record = match worker.await {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Extraction task for {} was lost: {}", queued.url, e);
            PageRecord::without_content(queued.url.as_str(), PageStatus::Failed)
        }
    };

    CompletedPage {
        index: queued.index,
        record,
    }
}

/// Scheduler runs extractions with a fixed concurrency limit
///
/// URLs start in queue order; with a limit of 1 every page is fetched and
/// reported strictly in sequence.
pub struct Scheduler {
    extractor: MetadataExtractor,
    pending: VecDeque<QueuedUrl>,
    in_flight: JoinSet<CompletedPage>,
    concurrency: usize,
}

impl Scheduler {
    /// Creates a new scheduler
    ///
    /// # Arguments
    ///
    /// * `extractor` - Extractor shared by every worker
    /// * `queue` - URLs to process, in the order they should start
    /// * `concurrency` - Maximum extractions in flight (at least 1)
    pub fn new(extractor: MetadataExtractor, queue: Vec<QueuedUrl>, concurrency: usize) -> Self {
        Self {
            extractor,
            pending: queue.into(),
            in_flight: JoinSet::new(),
            concurrency: concurrency.max(1),
        }
    }

    /// Starts queued extractions until the concurrency limit is reached
    fn fill(&mut self) {
        while self.in_flight.len() < self.concurrency {
            let queued = match self.pending.pop_front() {
                Some(queued) => queued,
                None => break,
            };

            let extractor = self.extractor.clone();
            let url = queued.url.clone();
            self.in_flight
                .spawn(run_guarded(queued, async move { extractor.extract(&url).await }));
        }
    }

    /// Waits for the next extraction to finish
    ///
    /// Cancel safe: dropping the returned future loses no result.
    ///
    /// # Returns
    ///
    /// * `Some(CompletedPage)` - The next page to finish
    /// * `None` - Every queued URL has been processed
    pub async fn next_completed(&mut self) -> Option<CompletedPage> {
        self.fill();

        loop {
            match self.in_flight.join_next().await {
                Some(Ok(page)) => return Some(page),
                Some(Err(e)) => {
                    // Only reachable through abort()
                    tracing::debug!("Worker stopped: {}", e);
                }
                None => return None,
            }
        }
    }

    /// Drops every queued URL and aborts in-flight extractions
    pub fn abort(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        self.in_flight.abort_all();
        tracing::debug!(
            "Scheduler aborted: {} queued URLs dropped, {} in flight",
            dropped,
            self.in_flight.len()
        );
    }

    /// Number of URLs queued or in flight
    pub fn remaining(&self) -> usize {
        self.pending.len() + self.in_flight.len()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
