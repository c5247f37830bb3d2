#![forbid(unsafe_code)]

//! Slug lookup for detail-view routing.
//!
//! The slug is the sole contract with the page-routing collaborator: a path
//! segment resolves to exactly one record, or to a distinct not-found
//! outcome the view renders as a fallback page.

use folio_model::ProjectRecord;

use crate::error::CatalogError;

/// Resolve a slug to the first record whose effective slug (stored when
/// present and non-empty, otherwise derived from the title) equals the
/// requested path segment.
///
/// A miss is an expected outcome, reported as
/// [`CatalogError::RecordNotFound`] — never a panic.
pub fn find_by_slug<'a>(
    records: &'a [ProjectRecord],
    slug: &str,
) -> Result<&'a ProjectRecord, CatalogError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("find_by_slug", slug = %slug).entered();

    records
        .iter()
        .find(|record| record.effective_slug() == slug)
        .ok_or_else(|| CatalogError::RecordNotFound {
            slug: slug.to_string(),
        })
}
