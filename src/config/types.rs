use serde::Deserialize;
use std::time::Duration;

/// User agent sent on every outbound request unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Compatible; SEO-Crawler/1.0)";

/// Main configuration structure for seo-sieve
///
/// Every section and field is optional in the TOML file; missing values fall
/// back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of page extractions in flight at once
    pub concurrency: u32,

    /// Timeout for the robots.txt fetch and the sitemap HEAD probes (seconds)
    #[serde(rename = "robots-timeout-secs")]
    pub robots_timeout_secs: u64,

    /// Timeout for each sitemap document fetch (seconds)
    #[serde(rename = "sitemap-timeout-secs")]
    pub sitemap_timeout_secs: u64,

    /// Timeout for each page fetch (seconds)
    #[serde(rename = "page-timeout-secs")]
    pub page_timeout_secs: u64,

    /// Maximum number of sitemap documents fetched in one resolution
    #[serde(rename = "max-sitemaps")]
    pub max_sitemaps: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            concurrency: 8,
            robots_timeout_secs: 5,
            sitemap_timeout_secs: 15,
            page_timeout_secs: 10,
            max_sitemaps: 500,
        }
    }
}

impl CrawlerConfig {
    pub fn robots_timeout(&self) -> Duration {
        Duration::from_secs(self.robots_timeout_secs)
    }

    pub fn sitemap_timeout(&self) -> Duration {
        Duration::from_secs(self.sitemap_timeout_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Full user agent header value
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV report of matched pages
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "seo_report.csv".to_string(),
        }
    }
}
