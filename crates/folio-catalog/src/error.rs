#![forbid(unsafe_code)]

//! Catalog error type.

use std::error::Error;
use std::fmt;

/// Errors surfaced by catalog operations.
///
/// These are expected, displayable conditions for the view layer to render
/// (a not-found page with a link back to the catalog), never faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested slug matches no record, neither stored nor derived.
    RecordNotFound {
        /// The slug that was requested.
        slug: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordNotFound { slug } => write!(f, "no project found for slug `{slug}`"),
        }
    }
}

impl Error for CatalogError {}
