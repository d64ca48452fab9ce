//! seo-sieve: a sitemap-driven SEO metadata crawler
//!
//! This crate discovers a site's sitemap, resolves every page URL it lists
//! (following sitemap indices), extracts title, meta description and H1 from
//! each page, and keeps the pages that mention any of the given search terms.

pub mod config;
pub mod crawler;
pub mod filter;
pub mod output;
pub mod record;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for seo-sieve operations
///
/// Only run-terminating failures live here. Per-page failures are folded into
/// [`record::PageStatus`] and never surface as errors.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid website URL: {0}")]
    InvalidInput(String),

    #[error("Could not find a sitemap for {site}")]
    SitemapNotFound { site: String },

    #[error("No URLs found in the sitemap {sitemap}")]
    NoUrlsFound { sitemap: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlState,
        to: state::CrawlState,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Empty URL")]
    Empty,
}

/// Result type alias for seo-sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CancelHandle, CrawlEvent, CrawlPipeline, ProgressEvent};
pub use filter::{contains_term, matches, MatchOutcome, SearchTerms};
pub use output::CrawlReport;
pub use record::{PageRecord, PageStatus, ABSENT_MARKER};
pub use state::{CrawlRun, CrawlState};
pub use url::{normalize_website_url, origin_of};
