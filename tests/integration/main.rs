//! Integration tests for seo-sieve
//!
//! These tests use wiremock to create mock HTTP servers and exercise
//! sitemap discovery, resolution, extraction and the full pipeline.

mod extractor_tests;
mod locator_tests;
mod resolver_tests;
mod support;
