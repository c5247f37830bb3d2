#![forbid(unsafe_code)]

//! Category facet selection.
//!
//! One type covers every UI variant the catalog views use: the multi-select
//! checkbox grid toggles labels in and out, the single-select dropdown
//! replaces the whole selection, and the all-categories sentinel maps to an
//! empty selection. The membership predicate is the same in all cases, so
//! the variants cannot drift apart.

/// A set of selected category labels.
///
/// Empty means "no restriction" — every record passes the category
/// dimension. Labels compare with exact, case-sensitive equality since
/// categories come from a fixed enumerated vocabulary, not free text.
/// Insertion order is kept but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CategorySelection {
    selected: Vec<String>,
}

impl CategorySelection {
    /// Create an empty (unrestricted) selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from the given labels. Duplicates are dropped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for label in labels {
            let label = label.into();
            if !selection.contains(&label) {
                selection.selected.push(label);
            }
        }
        selection
    }

    /// True when no category is selected (no restriction).
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.selected.is_empty()
    }

    /// True when `label` is currently selected.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.selected.iter().any(|selected| selected == label)
    }

    /// Toggle a label: remove it when present, add it otherwise.
    pub fn toggle(&mut self, label: &str) {
        if let Some(position) = self.selected.iter().position(|selected| selected == label) {
            self.selected.remove(position);
        } else {
            self.selected.push(label.to_string());
        }
    }

    /// Remove every selected label ("clear all filters").
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Single-select variant: replace the selection with one label, or clear
    /// it entirely for `None` (the all-categories sentinel). Functionally the
    /// n=1 case of the general membership rule.
    pub fn select_only(&mut self, label: Option<&str>) {
        self.selected.clear();
        if let Some(label) = label {
            self.selected.push(label.to_string());
        }
    }

    /// The membership predicate: an empty selection matches everything,
    /// otherwise the category must be a member (exact, case-sensitive).
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        self.selected.is_empty() || self.contains(category)
    }

    /// Currently selected labels, in insertion order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.selected
    }
}
