//! Crawl report types
//!
//! A [`CrawlReport`] is the final product of one run. It only lives in
//! memory; the CSV export is derived from it.

use crate::crawler::ResolveStats;
use crate::filter::SearchTerms;
use crate::record::{PageRecord, PageStatus};
use crate::state::CrawlState;
use chrono::{DateTime, Duration, Utc};

/// Per-status tally of processed pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub success: u64,
    pub http_errors: u64,
    pub scraper_errors: u64,
    pub failed: u64,
}

impl StatusCounts {
    pub fn record(&mut self, status: &PageStatus) {
        match status {
            PageStatus::Success => self.success += 1,
            PageStatus::HttpError(_) => self.http_errors += 1,
            PageStatus::ScraperError(_) => self.scraper_errors += 1,
            PageStatus::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.success + self.http_errors + self.scraper_errors + self.failed
    }

    pub fn errors(&self) -> u64 {
        self.http_errors + self.scraper_errors + self.failed
    }
}

/// Summary of a finished (or cancelled) crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Normalized website URL the run started from
    pub website: String,

    /// Sitemap that was resolved
    pub sitemap_url: String,

    pub search_terms: SearchTerms,

    /// `Completed` or `Cancelled`
    pub final_state: CrawlState,

    pub total_urls: usize,
    pub scanned: usize,

    /// Matched records in sitemap discovery order
    pub matches: Vec<PageRecord>,

    pub status_counts: StatusCounts,
    pub resolve_stats: ResolveStats,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    pub fn is_complete(&self) -> bool {
        self.final_state == CrawlState::Completed
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// Percentage of scanned pages that answered HTTP 200
    pub fn success_rate(&self) -> f64 {
        if self.scanned == 0 {
            return 0.0;
        }
        (self.status_counts.success as f64 / self.scanned as f64) * 100.0
    }
}
