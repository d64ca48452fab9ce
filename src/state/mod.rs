//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: the phase a run is in, with its legal transitions
//! - `CrawlRun`: per-run counters and the accumulating matched-results list

mod crawl_run;
mod crawl_state;

// Re-export main types
pub use crawl_run::CrawlRun;
pub use crawl_state::CrawlState;
