//! Configuration module for seo-sieve
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every value has a default, so running without a file
//! is the common case.
//!
//! # Example
//!
//! ```no_run
//! use seo_sieve::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-sieve.toml")).unwrap();
//! println!("Page timeout: {}s", config.crawler.page_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
