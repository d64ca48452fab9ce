//! URL handling module for seo-sieve
//!
//! This module provides website input normalization, origin derivation for
//! well-known path probing, and the keys used to detect already-visited
//! sitemaps.

mod normalize;

use url::Url;

pub use normalize::{normalize_website_url, sitemap_key};

/// Returns the origin (scheme + host + non-default port) of a URL
///
/// # Examples
///
/// ```
/// use seo_sieve::url::{normalize_website_url, origin_of};
///
/// let url = normalize_website_url("example.com/blog/post").unwrap();
/// assert_eq!(origin_of(&url), "https://example.com");
/// ```
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Appends an absolute path to an origin
pub fn join_origin(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// Resolves a possibly relative reference against an origin
///
/// Absolute references are returned untouched so their casing and path are
/// preserved exactly.
pub fn resolve_reference(origin: &str, reference: &str) -> Option<String> {
    if Url::parse(reference).is_ok() {
        return Some(reference.to_string());
    }

    Url::parse(origin)
        .and_then(|base| base.join(reference))
        .ok()
        .map(|url| url.to_string())
}
