//! Output module for crawl results
//!
//! This module handles:
//! - The in-memory run report
//! - CSV export of matched pages
//! - Console rendering of progress and summaries

pub mod console;
mod export;
mod report;

pub use console::{
    describe_event, format_report, no_match_message, print_report, render_match_row,
};
pub use export::{to_csv_string, write_csv, write_csv_file, CSV_HEADER};
pub use report::{CrawlReport, StatusCounts};
