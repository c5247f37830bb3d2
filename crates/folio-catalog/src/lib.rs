#![forbid(unsafe_code)]

//! Catalog filtering for the folio portfolio engine.
//!
//! Narrows the full ordered project list down to the records matching a
//! free-text query and a category selection, and resolves slugs to records
//! for detail-view routing. Everything is a pure function over the read-only
//! catalog plus small owned state; recomputation is cheap enough to run on
//! every keystroke or toggle.
//!
//! # Invariants
//!
//! 1. Filtering never reorders: the result is a subsequence of the input in
//!    original relative order.
//! 2. Filtering never mutates records; results borrow from the input.
//! 3. An empty category selection means "no restriction", never
//!    "match nothing".

pub mod error;
pub mod filter;
pub mod lookup;
pub mod selection;

pub use error::CatalogError;
pub use filter::{FilterState, filter_projects};
pub use lookup::find_by_slug;
pub use selection::CategorySelection;
