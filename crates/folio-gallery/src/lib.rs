#![forbid(unsafe_code)]

//! Gallery navigation for the folio portfolio engine.
//!
//! Maintains a bounded cursor over a project's normalized image sequence for
//! slideshow and lightbox display, with wraparound stepping, direct thumbnail
//! selection, and a dot indicator row.
//!
//! # Invariants
//!
//! 1. `current_index() < len()` whenever the gallery is non-empty, after
//!    every transition. This is the core correctness property.
//! 2. `next`/`previous` on an empty gallery are guarded no-ops; modulo by
//!    zero is unreachable.
//! 3. Prev/next controls are only meaningful with two or more images;
//!    [`GalleryState::controls_enabled`] gates them.

pub mod indicator;
pub mod state;

pub use indicator::DotIndicator;
pub use state::GalleryState;
