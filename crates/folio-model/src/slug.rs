#![forbid(unsafe_code)]

//! Slug derivation.
//!
//! A slug is the URL path segment routing to a project's detail view. Records
//! may carry a stored slug; when they don't, one is derived from the title.

/// Derive a slug from a project title.
///
/// Lowercases the title (full Unicode lowercasing) and replaces every maximal
/// run of whitespace with a single hyphen. Runs at the start or end of the
/// title become hyphens too. No other normalization is applied: punctuation
/// passes through unchanged.
///
/// The result is deterministic and idempotent: deriving from an already
/// derived slug yields the same string.
///
/// # Example
/// ```
/// use folio_model::derive_slug;
///
/// assert_eq!(derive_slug("My  Cool   App"), "my-cool-app");
/// assert_eq!(derive_slug("Cool  App!!"), "cool-app!!");
/// ```
#[must_use]
pub fn derive_slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_gap = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap {
                out.push('-');
                pending_gap = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    if pending_gap {
        out.push('-');
    }
    out
}
