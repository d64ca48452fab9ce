use std::fmt;

/// Keyword terms a page must mention to be kept
///
/// Parsed from a comma-separated string. Terms are trimmed, empty pieces are
/// dropped, and input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    /// Parses a comma-separated list of terms
    ///
    /// # Examples
    ///
    /// ```
    /// use seo_sieve::SearchTerms;
    ///
    /// let terms = SearchTerms::parse(" 2025, AI ,, Pricing");
    /// assert_eq!(terms.as_slice(), ["2025", "AI", "Pricing"]);
    /// assert!(SearchTerms::parse("").is_empty());
    /// ```
    pub fn parse(input: &str) -> Self {
        let terms = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    pub fn new(terms: Vec<String>) -> Self {
        Self::parse(&terms.join(","))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.join(", "))
    }
}
