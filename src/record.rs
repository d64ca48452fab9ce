//! Page records produced by metadata extraction
//!
//! A [`PageRecord`] is created once per crawled URL and never mutated
//! afterwards. Fields that could not be extracted are `None` and render as
//! the absent-marker `"N/A"`.

use std::fmt;

/// Sentinel rendered for fields that could not be extracted
pub const ABSENT_MARKER: &str = "N/A";

/// Outcome of fetching a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// HTTP 200 and the body was parsed
    Success,

    /// Any other HTTP status code
    HttpError(u16),

    /// Transport-level failure (timeout, DNS, connection, body read)
    ScraperError(String),

    /// The extraction task itself was lost before producing a result
    Failed,
}

impl PageStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::HttpError(code) => write!(f, "Error:{}", code),
            Self::ScraperError(detail) => write!(f, "scraper_error:{}", detail),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// SEO metadata extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Option<String>,
    pub status: PageStatus,
}

impl PageRecord {
    /// Creates a record with every content field absent
    pub fn without_content(url: impl Into<String>, status: PageStatus) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
            h1: None,
            status,
        }
    }

    pub fn title_or_marker(&self) -> &str {
        self.title.as_deref().unwrap_or(ABSENT_MARKER)
    }

    pub fn description_or_marker(&self) -> &str {
        self.description.as_deref().unwrap_or(ABSENT_MARKER)
    }

    pub fn h1_or_marker(&self) -> &str {
        self.h1.as_deref().unwrap_or(ABSENT_MARKER)
    }

    /// Cell values in export column order: URL, Title, Description, H1, Status
    pub fn cells(&self) -> [String; 5] {
        [
            self.url.clone(),
            self.title_or_marker().to_string(),
            self.description_or_marker().to_string(),
            self.h1_or_marker().to_string(),
            self.status.to_string(),
        ]
    }
}
