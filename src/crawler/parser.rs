//! HTML parser for extracting SEO metadata
//!
//! This module handles parsing HTML content to extract:
//! - Page title (from the first `<title>` tag)
//! - Meta description (from `<meta name="description">`, name matched case-insensitively)
//! - First `<h1>` heading

use scraper::{ElementRef, Html, Selector};

/// Extracted metadata from an HTML page
///
/// Every field is trimmed; empty values are reported as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// The meta description content
    pub description: Option<String>,

    /// Text of the first <h1>
    pub h1: Option<String>,
}

/// Parses HTML content and extracts SEO metadata
///
/// Malformed markup is tolerated; whatever the HTML5 parser recovers is
/// used.
///
/// # Example
///
/// ```
/// use seo_sieve::crawler::parse_html;
///
/// let html = r#"<html><head><title> Test </title>
///     <meta name="Description" content="About us"></head>
///     <body><h1>Hello</h1></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title.as_deref(), Some("Test"));
/// assert_eq!(parsed.description.as_deref(), Some("About us"));
/// assert_eq!(parsed.h1.as_deref(), Some("Hello"));
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: first_text(&document, "title"),
        description: extract_description(&document),
        h1: first_text(&document, "h1"),
    }
}

/// Trimmed text of the first element matching `selector`
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the meta description content
///
/// The first `<meta>` whose `name` equals `description` in any casing and
/// has non-blank content wins.
fn extract_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse("meta[name]").ok()?;

    document
        .select(&meta_selector)
        .filter(|element| {
            element
                .value()
                .attr("name")
                .map(|name| attr_eq_ignore_case(name, "description"))
                .unwrap_or(false)
        })
        .filter_map(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

/// Case-insensitive attribute value comparison
fn attr_eq_ignore_case(value: &str, expected: &str) -> bool {
    value.trim().eq_ignore_ascii_case(expected)
}
