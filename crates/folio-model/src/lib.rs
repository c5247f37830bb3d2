#![forbid(unsafe_code)]

//! Data model for the folio portfolio engine.
//!
//! Everything here is a plain, read-only value: the dataset is loaded once by
//! an external collaborator and never mutated by the filtering or gallery
//! logic built on top of it. The types mirror the portfolio JSON shape
//! directly, so a dataset deserializes without an intermediate layer.

pub mod dataset;
pub mod image;
pub mod record;
pub mod slug;

pub use dataset::{ALL_CATEGORIES, FacetVocabulary, PortfolioData, ProjectsSection};
pub use image::{ImageField, ImageRef};
pub use record::{ClientRef, ProjectRecord, Rating};
pub use slug::derive_slug;
