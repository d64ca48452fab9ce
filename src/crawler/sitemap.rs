//! Sitemap XML parser
//!
//! Reads both sitemap documents defined by sitemaps.org:
//! - `<sitemapindex>` whose `<sitemap><loc>` entries point at other sitemaps
//! - `<urlset>` whose `<url><loc>` entries are page URLs
//!
//! Namespace prefixes are ignored. Only the first `<loc>` that is a direct
//! child of an entry counts, so extension tags such as `<image:loc>` are
//! never mistaken for page URLs.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Shape of a parsed sitemap document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// Only `<sitemap>` entries
    Index,
    /// Only `<url>` entries
    UrlSet,
    /// Both entry kinds in one document
    Mixed,
    /// Neither entry kind (malformed or empty document)
    Empty,
}

/// Entries of one sitemap document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapNode {
    /// Child sitemap locations (index entries)
    pub sitemaps: Vec<String>,

    /// Page locations (url-set entries)
    pub urls: Vec<String>,
}

impl SitemapNode {
    pub fn kind(&self) -> SitemapKind {
        match (self.sitemaps.is_empty(), self.urls.is_empty()) {
            (false, true) => SitemapKind::Index,
            (true, false) => SitemapKind::UrlSet,
            (false, false) => SitemapKind::Mixed,
            (true, true) => SitemapKind::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Sitemap,
    Url,
}

/// Entry element currently open
struct OpenEntry {
    kind: EntryKind,
    depth: usize,
    loc_taken: bool,
}

/// Parses a sitemap document
///
/// Never fails. A parse error stops reading and keeps the entries collected
/// before it; a document without entries yields an empty node.
///
/// # Example
///
/// ```
/// use seo_sieve::crawler::{parse_sitemap, SitemapKind};
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/a</loc></url>
/// </urlset>"#;
/// let node = parse_sitemap(xml);
/// assert_eq!(node.kind(), SitemapKind::UrlSet);
/// assert_eq!(node.urls, vec!["https://example.com/a".to_string()]);
/// ```
pub fn parse_sitemap(xml: &str) -> SitemapNode {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut node = SitemapNode::default();
    let mut depth = 0usize;
    let mut entry: Option<OpenEntry> = None;
    let mut loc: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"sitemap" if entry.is_none() => {
                        entry = Some(OpenEntry {
                            kind: EntryKind::Sitemap,
                            depth,
                            loc_taken: false,
                        })
                    }
                    b"url" if entry.is_none() => {
                        entry = Some(OpenEntry {
                            kind: EntryKind::Url,
                            depth,
                            loc_taken: false,
                        })
                    }
                    b"loc" => {
                        let is_entry_loc = entry
                            .as_ref()
                            .map(|open| open.depth + 1 == depth && !open.loc_taken)
                            .unwrap_or(false);
                        if is_entry_loc {
                            loc = Some(String::new());
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(buf) = loc.as_mut() {
                    match text.unescape() {
                        Ok(value) => buf.push_str(&value),
                        Err(e) => tracing::debug!("Skipping undecodable <loc> text: {}", e),
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(buf) = loc.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                let closes_entry = entry
                    .as_ref()
                    .map(|open| open.depth == depth)
                    .unwrap_or(false);

                if name.as_ref() == b"loc" {
                    if let (Some(value), Some(open)) = (loc.take(), entry.as_mut()) {
                        let value = value.trim();
                        if !value.is_empty() {
                            match open.kind {
                                EntryKind::Sitemap => node.sitemaps.push(value.to_string()),
                                EntryKind::Url => node.urls.push(value.to_string()),
                            }
                        }
                        open.loc_taken = true;
                    }
                } else if closes_entry {
                    entry = None;
                    loc = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    "Malformed sitemap XML near byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    node
}
