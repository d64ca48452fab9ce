//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with the identifying user agent
//! - GET requests with a per-call timeout
//! - HEAD existence probes
//! - Error classification

use crate::config::UserAgentConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Maximum redirect hops followed for any request
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// HTTP 200 with a readable body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// Any status other than 200
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// Timeouts are set per request since robots, sitemap and page fetches each
/// have their own budget. Redirects are followed.
///
/// # Example
///
/// ```no_run
/// use seo_sieve::config::UserAgentConfig;
/// use seo_sieve::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.value.clone())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a GET request
///
/// Never fails: every outcome is classified into a [`FetchResult`].
pub async fn fetch_url(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    tracing::debug!("GET {}", url);

    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: describe_error(&e),
            }
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    match response.text().await {
        Ok(body) => FetchResult::Success { final_url, body },
        Err(e) => FetchResult::NetworkError {
            error: describe_error(&e),
        },
    }
}

/// Sends a HEAD request and reports the final status code
///
/// # Returns
///
/// * `Some(u16)` - Status code after following redirects
/// * `None` - Network error or timeout
pub async fn probe_url(client: &Client, url: &str, timeout: Duration) -> Option<u16> {
    tracing::debug!("HEAD {}", url);

    match client.head(url).timeout(timeout).send().await {
        Ok(response) => Some(response.status().as_u16()),
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", url, describe_error(&e));
            None
        }
    }
}

/// Renders a reqwest error as a short human-readable message
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    }
}
