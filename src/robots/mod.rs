//! Robots.txt handling module
//!
//! This module fetches a site's robots.txt and reads the sitemap locations it
//! declares. Failures are never fatal: a missing or unreachable robots.txt
//! simply means the caller falls back to well-known sitemap paths.

mod parser;

pub use parser::ParsedRobots;

use crate::crawler::{fetch_url, FetchResult};
use crate::url::join_origin;
use reqwest::Client;
use std::time::Duration;

/// Fetches robots.txt for an origin
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `origin` - Scheme + host (+ port) of the site
/// * `timeout` - Timeout for this request
///
/// # Returns
///
/// * `Some(ParsedRobots)` - robots.txt answered HTTP 200
/// * `None` - Any network error, timeout, or non-200 status
pub async fn fetch_robots(client: &Client, origin: &str, timeout: Duration) -> Option<ParsedRobots> {
    let robots_url = join_origin(origin, "/robots.txt");
    tracing::info!("Checking robots.txt at {}", robots_url);

    match fetch_url(client, &robots_url, timeout).await {
        FetchResult::Success { body, .. } => Some(ParsedRobots::from_content(&body)),
        FetchResult::HttpError { status_code } => {
            tracing::info!(
                "robots.txt unavailable (HTTP {}), proceeding to fallbacks",
                status_code
            );
            None
        }
        FetchResult::NetworkError { error } => {
            tracing::warn!(
                "Error checking robots.txt at {}: {}. Proceeding to fallbacks",
                robots_url,
                error
            );
            None
        }
    }
}
