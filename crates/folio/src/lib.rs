#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! The one crate downstream users depend on: re-exports the model, catalog,
//! and gallery types, adds a dataset loading helper with a single top-level
//! error type, and ships a prelude for day-to-day usage.

use std::fmt;
use std::path::Path;

// --- Model re-exports ------------------------------------------------------

pub use folio_model::{
    ALL_CATEGORIES, ClientRef, FacetVocabulary, ImageField, ImageRef, PortfolioData,
    ProjectRecord, ProjectsSection, Rating, derive_slug,
};

// --- Catalog re-exports ----------------------------------------------------

pub use folio_catalog::{CatalogError, CategorySelection, FilterState, filter_projects, find_by_slug};

// --- Gallery re-exports ----------------------------------------------------

pub use folio_gallery::{DotIndicator, GalleryState};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading a dataset file.
    Io(std::io::Error),
    /// The dataset document failed to parse.
    Parse(serde_json::Error),
    /// A catalog operation failed (e.g. slug lookup miss).
    Catalog(CatalogError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "invalid portfolio dataset: {err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Dataset loading -------------------------------------------------------

/// Parse a portfolio dataset from a JSON string.
pub fn parse_portfolio(json: &str) -> Result<PortfolioData> {
    Ok(serde_json::from_str(json)?)
}

/// Load a portfolio dataset from a JSON file.
pub fn load_portfolio(path: impl AsRef<Path>) -> Result<PortfolioData> {
    let json = std::fs::read_to_string(path)?;
    parse_portfolio(&json)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CatalogError, CategorySelection, DotIndicator, Error, FilterState, GalleryState,
        ImageField, PortfolioData, ProjectRecord, Result, derive_slug, filter_projects,
        find_by_slug, load_portfolio, parse_portfolio,
    };

    pub use crate::{catalog, gallery, model};
}

pub use folio_catalog as catalog;
pub use folio_gallery as gallery;
pub use folio_model as model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_dataset() {
        let json = r#"{
            "projects": {
                "title": "Projects",
                "subtitle": "Selected work",
                "filters": {"categories": ["Web", "Mobile"], "platforms": []},
                "items": [
                    {"title": "Alpha Store", "category": "Web", "tags": ["react"],
                     "image": ["a.png", "b.png"]}
                ]
            }
        }"#;
        let data = parse_portfolio(json).unwrap();
        let record = find_by_slug(&data.projects.items, "alpha-store").unwrap();
        assert_eq!(record.category, "Web");
        let gallery = GalleryState::new(&record.image);
        assert!(gallery.controls_enabled());
    }

    #[test]
    fn parse_failure_is_a_parse_error() {
        let err = parse_portfolio("{not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("invalid portfolio dataset"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_portfolio("/definitely/not/a/file.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn catalog_error_converts() {
        let err: Error = CatalogError::RecordNotFound {
            slug: "x".into(),
        }
        .into();
        assert!(matches!(err, Error::Catalog(_)));
    }
}
