#![forbid(unsafe_code)]

//! The catalog filter predicate.
//!
//! A record is visible iff it matches the free-text query AND the category
//! selection. The text side is a case-insensitive substring match over
//! title, description, and tags ("contains", not tokenized); the category
//! side is exact membership. Queries are trimmed of leading and trailing
//! whitespace before matching, so a whitespace-only query behaves like an
//! empty one.

use folio_model::ProjectRecord;

use crate::selection::CategorySelection;

/// Ephemeral per-view filter state: the query text plus the category
/// selection. Created fresh when a catalog view is entered, discarded when
/// it is left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FilterState {
    /// Free-text query; defaults empty (match everything).
    pub query: String,
    /// Category facet selection; defaults unrestricted.
    pub categories: CategorySelection,
}

impl FilterState {
    /// Create an empty filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this state to the full catalog. Pure; safe to call on every
    /// keystroke or toggle.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter_projects(records, &self.query, &self.categories)
    }

    /// Reset query and selection to their defaults.
    pub fn reset(&mut self) {
        self.query.clear();
        self.categories.clear();
    }
}

/// Produce the visible subset of `records` for the given query and category
/// selection.
///
/// Pure function of its inputs: records are never mutated, the result
/// borrows from `records` and preserves its relative order (exclusion only,
/// no reordering). Zero records yield an empty result.
#[must_use]
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    query: &str,
    selection: &CategorySelection,
) -> Vec<&'a ProjectRecord> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "filter_projects",
        records = records.len(),
        query = %query,
        selected = selection.labels().len()
    )
    .entered();

    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches_text(record, &needle) && selection.matches(&record.category))
        .collect()
}

/// Text match: empty needle matches everything; otherwise the lowercased
/// needle must appear in the title, the description (when present), or at
/// least one tag. `client.feedback` is deliberately not searched.
fn matches_text(record: &ProjectRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains_ignore_case(&record.title, needle)
        || record
            .description
            .as_deref()
            .is_some_and(|description| contains_ignore_case(description, needle))
        || record.tags.iter().any(|tag| contains_ignore_case(tag, needle))
}

/// Case-insensitive substring test. `needle` must already be lowercased.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
