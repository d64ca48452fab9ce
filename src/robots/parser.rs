//! Robots.txt scanning for `Sitemap:` directives
//!
//! Only the sitemap declarations are read. Allow/Disallow groups and
//! crawl-delay are ignored.

const SITEMAP_PREFIX: &str = "sitemap:";

/// Parsed `Sitemap:` directives of a robots.txt file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRobots {
    sitemaps: Vec<String>,
}

impl ParsedRobots {
    /// Scans raw robots.txt content
    ///
    /// A directive is a line whose first non-blank characters are `sitemap:`
    /// in any casing. The value is trimmed and keeps its own casing; empty
    /// values are skipped.
    pub fn from_content(content: &str) -> Self {
        let sitemaps = content
            .lines()
            .filter_map(sitemap_value)
            .map(str::to_string)
            .collect();
        Self { sitemaps }
    }

    /// The first declared sitemap, if any
    pub fn first_sitemap(&self) -> Option<&str> {
        self.sitemaps.first().map(String::as_str)
    }

    /// All declared sitemaps in file order
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }
}

fn sitemap_value(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let prefix = line.get(..SITEMAP_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SITEMAP_PREFIX) {
        return None;
    }

    let value = line[SITEMAP_PREFIX.len()..].trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
