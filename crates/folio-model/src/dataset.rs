#![forbid(unsafe_code)]

//! The portfolio dataset container.
//!
//! Mirrors the JSON document supplied at view-initialization time: a
//! `projects` section holding the catalog items plus the facet vocabulary
//! (the fixed category and platform label lists the filter UI offers).

use serde::{Deserialize, Serialize};

use crate::record::ProjectRecord;

/// Sentinel label carried by some datasets' category lists, meaning "no
/// category restriction" in the single-select UI variant.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Fixed facet vocabulary: ordered category and platform labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetVocabulary {
    /// Ordered category labels, possibly including [`ALL_CATEGORIES`].
    #[serde(default)]
    pub categories: Vec<String>,
    /// Ordered platform labels; informational only.
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl FacetVocabulary {
    /// Category labels offered as individual filter choices, with the
    /// all-categories sentinel excluded.
    pub fn selectable_categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(String::as_str)
            .filter(|label| *label != ALL_CATEGORIES)
    }
}

/// The `projects` section of the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsSection {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Section subheading.
    #[serde(default)]
    pub subtitle: String,
    /// Facet vocabulary for the filter UI.
    #[serde(default)]
    pub filters: FacetVocabulary,
    /// The full ordered catalog.
    #[serde(default)]
    pub items: Vec<ProjectRecord>,
}

/// Root of the portfolio dataset document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    /// The projects section.
    pub projects: ProjectsSection,
}
