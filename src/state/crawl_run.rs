use crate::crawler::ResolveStats;
use crate::filter::SearchTerms;
use crate::output::{CrawlReport, StatusCounts};
use crate::record::PageRecord;
use crate::state::CrawlState;
use crate::SieveError;
use chrono::{DateTime, Utc};

/// Session state of one crawl invocation
///
/// Owned by the pipeline and passed explicitly; nothing here outlives the
/// run. The matched list is append-only in processing order; each entry
/// remembers its discovery index so the final report can restore sitemap
/// order.
#[derive(Debug, Clone)]
pub struct CrawlRun {
    website: String,
    terms: SearchTerms,
    state: CrawlState,
    sitemap_url: Option<String>,
    total_urls: usize,
    scanned: usize,
    matches: Vec<(usize, PageRecord)>,
    status_counts: StatusCounts,
    resolve_stats: ResolveStats,
    started_at: DateTime<Utc>,
}

impl CrawlRun {
    pub fn new(website: impl Into<String>, terms: SearchTerms) -> Self {
        Self {
            website: website.into(),
            terms,
            state: CrawlState::Idle,
            sitemap_url: None,
            total_urls: 0,
            scanned: 0,
            matches: Vec::new(),
            status_counts: StatusCounts::default(),
            resolve_stats: ResolveStats::default(),
            started_at: Utc::now(),
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn terms(&self) -> &SearchTerms {
        &self.terms
    }

    pub fn sitemap_url(&self) -> Option<&str> {
        self.sitemap_url.as_deref()
    }

    /// Moves the run to `next`, rejecting illegal transitions
    pub fn transition(&mut self, next: CrawlState) -> Result<(), SieveError> {
        if !self.state.can_transition_to(next) {
            return Err(SieveError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!("Crawl state {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    pub fn set_sitemap(&mut self, url: impl Into<String>) {
        self.sitemap_url = Some(url.into());
    }

    pub fn set_resolution(&mut self, total_urls: usize, stats: ResolveStats) {
        self.total_urls = total_urls;
        self.resolve_stats = stats;
    }

    /// Records one processed page
    ///
    /// `index` is the page's 1-based position in discovery order.
    pub fn record_page(&mut self, index: usize, record: &PageRecord, matched: bool) {
        self.scanned += 1;
        self.status_counts.record(&record.status);
        if matched {
            self.matches.push((index, record.clone()));
        }
    }

    pub fn total_urls(&self) -> usize {
        self.total_urls
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn matches_found(&self) -> usize {
        self.matches.len()
    }

    /// Matched records in the order they were processed
    pub fn matches(&self) -> impl Iterator<Item = &PageRecord> {
        self.matches.iter().map(|(_, record)| record)
    }

    /// Closes the run into a report with matches in discovery order
    pub fn into_report(self) -> CrawlReport {
        let mut matches = self.matches;
        matches.sort_by_key(|(index, _)| *index);

        CrawlReport {
            website: self.website,
            sitemap_url: self.sitemap_url.unwrap_or_default(),
            search_terms: self.terms,
            final_state: self.state,
            total_urls: self.total_urls,
            scanned: self.scanned,
            matches: matches.into_iter().map(|(_, record)| record).collect(),
            status_counts: self.status_counts,
            resolve_stats: self.resolve_stats,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
