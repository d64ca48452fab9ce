use crate::filter::SearchTerms;
use crate::record::PageRecord;
use std::fmt;

/// Record field that can contain a search term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    Title,
    Description,
    H1,
}

impl Field {
    /// Fields consulted when deciding inclusion, in column order
    pub const SEARCHABLE: [Field; 4] = [Field::Url, Field::Title, Field::Description, Field::H1];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::H1 => "H1",
        }
    }

    /// Value of this field in a record, `None` when absent
    pub fn value<'a>(&self, record: &'a PageRecord) -> Option<&'a str> {
        match self {
            Self::Url => Some(record.url.as_str()),
            Self::Title => record.title.as_deref(),
            Self::Description => record.description.as_deref(),
            Self::H1 => record.h1.as_deref(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single field/term hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: Field,
    pub term: String,
}

/// Result of filtering one record against the search terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Every field/term pair that matched, in field order then term order
    pub hits: Vec<FieldMatch>,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        !self.hits.is_empty()
    }

    /// Distinct fields that matched at least one term
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::new();
        for hit in &self.hits {
            if !fields.contains(&hit.field) {
                fields.push(hit.field);
            }
        }
        fields
    }

    pub fn field_matched(&self, field: Field) -> bool {
        self.hits.iter().any(|hit| hit.field == field)
    }

    /// Terms that matched the given field
    pub fn terms_for(&self, field: Field) -> Vec<&str> {
        self.hits
            .iter()
            .filter(|hit| hit.field == field)
            .map(|hit| hit.term.as_str())
            .collect()
    }
}

/// Case-insensitive substring check
///
/// Empty text or an empty term never matches.
///
/// # Examples
///
/// ```
/// use seo_sieve::contains_term;
///
/// assert!(contains_term("AI Pricing", "ai"));
/// assert!(!contains_term("", "ai"));
/// ```
pub fn contains_term(text: &str, term: &str) -> bool {
    if text.is_empty() || term.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Decides whether a record is kept and which fields caused it
///
/// An empty term list keeps nothing. Otherwise the record is kept when any
/// term occurs in any of URL, Title, Description or H1; absent fields never
/// match.
pub fn matches(record: &PageRecord, terms: &SearchTerms) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    if terms.is_empty() {
        return outcome;
    }

    for field in Field::SEARCHABLE {
        let Some(text) = field.value(record) else {
            continue;
        };
        for term in terms.iter() {
            if contains_term(text, term) {
                outcome.hits.push(FieldMatch {
                    field,
                    term: term.to_string(),
                });
            }
        }
    }

    outcome
}

/// Per-cell highlight flags in export column order
///
/// Covers URL, Title, Description, H1 and Status. The absent-marker never
/// highlights.
pub fn highlights(record: &PageRecord, terms: &SearchTerms) -> [bool; 5] {
    let status = record.status.to_string();
    let cells = [
        Some(record.url.as_str()),
        record.title.as_deref(),
        record.description.as_deref(),
        record.h1.as_deref(),
        Some(status.as_str()),
    ];

    cells.map(|cell| match cell {
        Some(text) => terms.iter().any(|term| contains_term(text, term)),
        None => false,
    })
}
