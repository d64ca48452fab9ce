//! Crawl state definitions
//!
//! A run moves through `Idle → LocatingSitemap → ResolvingUrls → Processing →
//! Completed`. `SitemapNotFound` and `NoUrlsFound` are the failure exits of
//! the first two phases; `Cancelled` ends a run the caller abandoned.
use std::fmt;

/// Represents the current phase of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    // ===== Active States =====
    /// Run created, nothing started yet
    Idle,

    /// Looking for the sitemap via robots.txt and well-known paths
    LocatingSitemap,

    /// Fetching and expanding the sitemap tree
    ResolvingUrls,

    /// Extracting and filtering pages
    Processing,

    // ===== Terminal States =====
    /// Every resolved URL was processed
    Completed,

    /// No sitemap could be located
    SitemapNotFound,

    /// The sitemap tree contained no page URLs
    NoUrlsFound,

    /// The caller abandoned the run
    Cancelled,
}

impl CrawlState {
    /// Returns true if this is a terminal state (the run is over)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::SitemapNotFound | Self::NoUrlsFound | Self::Cancelled
        )
    }

    /// Returns true if this state ends the run with an error
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SitemapNotFound | Self::NoUrlsFound)
    }

    /// Checks whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        use CrawlState::*;

        matches!(
            (self, next),
            (Idle, LocatingSitemap)
                | (LocatingSitemap, ResolvingUrls)
                | (LocatingSitemap, SitemapNotFound)
                | (LocatingSitemap, Cancelled)
                | (ResolvingUrls, Processing)
                | (ResolvingUrls, NoUrlsFound)
                | (ResolvingUrls, Cancelled)
                | (Processing, Completed)
                | (Processing, Cancelled)
        )
    }

    /// Short machine-friendly name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LocatingSitemap => "locating_sitemap",
            Self::ResolvingUrls => "resolving_urls",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::SitemapNotFound => "sitemap_not_found",
            Self::NoUrlsFound => "no_urls_found",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns all possible crawl states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Idle,
            Self::LocatingSitemap,
            Self::ResolvingUrls,
            Self::Processing,
            Self::Completed,
            Self::SitemapNotFound,
            Self::NoUrlsFound,
            Self::Cancelled,
        ]
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
