#![forbid(unsafe_code)]

//! The `image` field of a project record.
//!
//! Datasets are inconsistent about this field: some records carry a single
//! image reference, some an ordered list, some nothing at all. [`ImageField`]
//! deserializes all three shapes and [`ImageField::normalize`] coerces them
//! into one ordered sequence for the gallery.

use serde::{Deserialize, Serialize};

/// An opaque image reference (URL or path). The engine never loads images.
pub type ImageRef = String;

/// The raw `image` field of a record: absent, a single reference, or an
/// ordered list of references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    /// No image (field absent or `null`). Means: no gallery.
    #[default]
    Absent,
    /// A single image reference.
    Single(ImageRef),
    /// An ordered sequence of image references (may be empty).
    Many(Vec<ImageRef>),
}

impl ImageField {
    /// Coerce into an ordered sequence: absent becomes empty, a single
    /// reference becomes a one-element sequence, a list is kept as-is with
    /// order preserved.
    #[must_use]
    pub fn normalize(&self) -> Vec<ImageRef> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(image) => vec![image.clone()],
            Self::Many(images) => images.clone(),
        }
    }

    /// Number of images after normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Single(_) => 1,
            Self::Many(images) => images.len(),
        }
    }

    /// True when normalization yields no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
