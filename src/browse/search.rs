//! Catalog search
//!
//! Only entries sitting exactly two levels below the scan root with a valid
//! entry name are searchable, even though every extracted entry stays in the
//! catalog itself.

use crate::catalog::extract::ENTRY_DEPTH;
use crate::catalog::CatalogEntry;
use crate::naming::is_entry_name_valid;
use unicode_normalization::UnicodeNormalization;

/// A parsed search box query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Digits only: exact match on a non-zero sequence number.
    Numeric(String),
    /// Normalized substring of the entry name.
    Text(String),
}

impl SearchQuery {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            SearchQuery::Numeric(trimmed.to_string())
        } else {
            SearchQuery::Text(normalize_search_string(text))
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            // Number 0 counts as "no number" and is never matched.
            SearchQuery::Numeric(digits) => entry
                .sequence_number
                .filter(|n| *n != 0)
                .map(|n| n.to_string() == *digits)
                .unwrap_or(false),
            SearchQuery::Text(needle) => normalize_search_string(&entry.name).contains(needle.as_str()),
        }
    }
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercase, strip accents and punctuation, collapse whitespace.
pub fn normalize_search_string(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether an entry can appear in search results.
pub fn is_searchable(entry: &CatalogEntry) -> bool {
    entry.depth() == ENTRY_DEPTH && is_entry_name_valid(entry.folder_name())
}

/// Searchable entries matching the query, in catalog order.
pub fn search<'a>(entries: &'a [CatalogEntry], query: &SearchQuery) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|entry| is_searchable(entry))
        .filter(|entry| query.matches(entry))
        .collect()
}
