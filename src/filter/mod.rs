//! Keyword filtering of extracted page records
//!
//! Matching is plain case-insensitive substring containment over the URL,
//! title, meta description and H1. There is no tokenization or stemming.

mod matcher;
mod terms;

pub use matcher::{contains_term, highlights, matches, Field, FieldMatch, MatchOutcome};
pub use terms::SearchTerms;
