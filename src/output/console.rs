//! Console rendering of crawl progress and results
//!
//! Everything here builds strings; the binary decides where they go.

use crate::crawler::{CrawlEvent, ProgressEvent};
use crate::output::CrawlReport;
use crate::record::PageRecord;
use crate::state::CrawlState;

/// Human-readable line for a crawl event, `None` for events not worth a line
pub fn describe_event(event: &CrawlEvent) -> Option<String> {
    match event {
        CrawlEvent::StateChanged(state) => describe_state(*state).map(str::to_string),
        CrawlEvent::SitemapFound(url) => Some(format!("Sitemap found: {}", url)),
        CrawlEvent::UrlsResolved { total, stats } => Some(format!(
            "Found {} URLs in {} sitemap(s) ({} failed)",
            total, stats.fetched, stats.failed
        )),
        CrawlEvent::PageProcessed(progress) => Some(describe_progress(progress)),
        CrawlEvent::Completed(report) => Some(format!(
            "Done: {} pages scanned, {} matches",
            report.scanned,
            report.match_count()
        )),
    }
}

fn describe_state(state: CrawlState) -> Option<&'static str> {
    match state {
        CrawlState::LocatingSitemap => Some("Locating sitemap..."),
        CrawlState::ResolvingUrls => Some("Resolving sitemap URLs..."),
        CrawlState::Processing => Some("Processing pages..."),
        CrawlState::Cancelled => Some("Crawl cancelled"),
        _ => None,
    }
}

/// Progress line, e.g. `[3/12] matches: 1 https://example.com/a (Success)`
pub fn describe_progress(progress: &ProgressEvent) -> String {
    let marker = if progress.matched { "+" } else { " " };
    format!(
        "[{}/{}] {} matches: {} {} ({})",
        progress.scanned,
        progress.total,
        marker,
        progress.matches_found,
        progress.record.url,
        progress.record.status
    )
}

/// Renders a record's cells, wrapping highlighted ones in `*`
pub fn render_match_row(record: &PageRecord, highlights: &[bool; 5]) -> String {
    record
        .cells()
        .iter()
        .zip(highlights.iter())
        .map(|(cell, lit)| {
            if *lit {
                format!("*{}*", cell)
            } else {
                cell.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Formats the end-of-run summary
pub fn format_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Summary ===\n\n");
    out.push_str(&format!("Website: {}\n", report.website));
    out.push_str(&format!("Sitemap: {}\n", report.sitemap_url));
    out.push_str(&format!("Search terms: {}\n", report.search_terms));
    out.push_str(&format!("State: {}\n", report.final_state));
    out.push_str(&format!(
        "Duration: {:.1}s\n\n",
        report.duration().num_milliseconds() as f64 / 1000.0
    ));

    out.push_str("Sitemaps:\n");
    out.push_str(&format!("  Fetched: {}\n", report.resolve_stats.fetched));
    out.push_str(&format!("  Failed: {}\n", report.resolve_stats.failed));
    if report.resolve_stats.skipped_duplicates > 0 {
        out.push_str(&format!(
            "  Skipped (already visited): {}\n",
            report.resolve_stats.skipped_duplicates
        ));
    }
    if report.resolve_stats.skipped_over_limit > 0 {
        out.push_str(&format!(
            "  Skipped (limit reached): {}\n",
            report.resolve_stats.skipped_over_limit
        ));
    }
    out.push('\n');

    out.push_str("Pages:\n");
    out.push_str(&format!("  Total URLs: {}\n", report.total_urls));
    out.push_str(&format!("  Scanned: {}\n", report.scanned));
    out.push_str(&format!("  Success: {}\n", report.status_counts.success));
    out.push_str(&format!(
        "  HTTP errors: {}\n",
        report.status_counts.http_errors
    ));
    out.push_str(&format!(
        "  Fetch errors: {}\n",
        report.status_counts.scraper_errors
    ));
    if report.status_counts.failed > 0 {
        out.push_str(&format!("  Lost tasks: {}\n", report.status_counts.failed));
    }
    out.push('\n');

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} pages)\n",
        report.success_rate(),
        report.status_counts.success,
        report.scanned
    ));
    out.push_str(&format!("Matches: {}\n", report.match_count()));

    out
}

/// Closing line for a run without matches, `None` when something matched
///
/// Only a completed run can claim that nothing matches.
pub fn no_match_message(report: &CrawlReport) -> Option<String> {
    if !report.matches.is_empty() {
        return None;
    }
    if report.is_complete() {
        Some(format!("No pages found matching: {}", report.search_terms))
    } else {
        Some(format!(
            "Crawl cancelled after {} of {} pages, no match found so far",
            report.scanned, report.total_urls
        ))
    }
}

/// Prints the end-of-run summary to stdout
pub fn print_report(report: &CrawlReport) {
    println!("{}", format_report(report));
}
