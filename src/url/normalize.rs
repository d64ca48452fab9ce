use crate::UrlError;
use url::Url;

/// Normalizes a user-supplied website address
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prefix `https://` when no `http://` or `https://` scheme is given
/// 3. Parse the URL; reject if malformed
/// 4. Require an HTTP(S) scheme and a host
///
/// # Examples
///
/// ```
/// use seo_sieve::url::normalize_website_url;
///
/// let url = normalize_website_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_website_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let with_scheme = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost),
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Builds the visited-set key for a sitemap URL
///
/// Parsing lowercases the scheme and host; the fragment is dropped since it
/// never reaches the server. Unparseable input is keyed by its trimmed text.
pub fn sitemap_key(url_str: &str) -> String {
    let trimmed = url_str.trim();
    match Url::parse(trimmed) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => trimmed.to_string(),
    }
}
