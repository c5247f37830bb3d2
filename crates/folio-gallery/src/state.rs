#![forbid(unsafe_code)]

//! Gallery cursor state.

use folio_model::{ImageField, ImageRef};

/// A bounded cursor over an ordered image sequence.
///
/// Two states: "no gallery" (empty sequence, the cursor is unused) and
/// "gallery active" (non-empty, `current_index() < len()` always holds).
/// Created fresh per view and discarded with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GalleryState {
    images: Vec<ImageRef>,
    current: usize,
}

impl GalleryState {
    /// Build a gallery from a record's raw image field. The field is
    /// normalized (absent → empty, single → one element) and the cursor
    /// starts at 0.
    #[must_use]
    pub fn new(image: &ImageField) -> Self {
        Self::from_images(image.normalize())
    }

    /// Build a gallery from an already-normalized sequence.
    #[must_use]
    pub fn from_images(images: Vec<ImageRef>) -> Self {
        Self { images, current: 0 }
    }

    /// The normalized image sequence, in insertion order.
    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True in the "no gallery" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Current cursor position. Only meaningful when the gallery is
    /// non-empty; in range whenever it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The image under the cursor, or `None` for an empty gallery.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.current)
    }

    /// Whether prev/next controls should be shown: wraparound on zero or one
    /// image is a degenerate no-op, so controls exist only for two or more.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.images.len() > 1
    }

    /// Step forward with wraparound: the last image steps back to the first.
    /// No-op on an empty gallery.
    pub fn next(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.current = (self.current + 1) % len;
            #[cfg(feature = "tracing")]
            tracing::trace!(current = self.current, len, "gallery next");
        }
    }

    /// Step backward with wraparound: the first image steps back to the
    /// last. No-op on an empty gallery.
    pub fn previous(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
            #[cfg(feature = "tracing")]
            tracing::trace!(current = self.current, len, "gallery previous");
        }
    }

    /// Jump directly to `index` (thumbnail click).
    ///
    /// Thumbnails are generated from the same sequence, so callers only
    /// offer in-range indices; anything else is a caller bug. Debug builds
    /// assert on it, release builds clamp to the last valid index so the
    /// range invariant holds either way. No-op on an empty gallery.
    pub fn select(&mut self, index: usize) {
        if self.images.is_empty() {
            return;
        }
        debug_assert!(
            index < self.images.len(),
            "gallery select out of range: {index} >= {}",
            self.images.len()
        );
        #[cfg(feature = "tracing")]
        if index >= self.images.len() {
            tracing::warn!(index, len = self.images.len(), "gallery select out of range, clamping");
        }
        self.current = index.min(self.images.len() - 1);
    }
}
