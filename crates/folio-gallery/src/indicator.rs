#![forbid(unsafe_code)]

//! Dot indicator row.
//!
//! Card galleries render one dot per image with the current one highlighted.
//! Symbols are caller-configurable; when the row would not fit the available
//! width the indicator falls back to a compact `current/total` form.

use unicode_width::UnicodeWidthStr;

use crate::state::GalleryState;

/// Formats the dot row for a gallery.
#[derive(Debug, Clone)]
pub struct DotIndicator<'a> {
    active_symbol: &'a str,
    inactive_symbol: &'a str,
}

impl<'a> Default for DotIndicator<'a> {
    fn default() -> Self {
        Self {
            active_symbol: "●",
            inactive_symbol: "○",
        }
    }
}

impl<'a> DotIndicator<'a> {
    /// Create an indicator with the default symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbols for the current and the other images.
    #[must_use]
    pub fn symbols(mut self, active: &'a str, inactive: &'a str) -> Self {
        self.active_symbol = active;
        self.inactive_symbol = inactive;
        self
    }

    /// One symbol per image, the current one active. Empty string for an
    /// empty gallery (no indicator is shown).
    #[must_use]
    pub fn format(&self, state: &GalleryState) -> String {
        let mut out = String::new();
        for index in 0..state.len() {
            if index == state.current_index() {
                out.push_str(self.active_symbol);
            } else {
                out.push_str(self.inactive_symbol);
            }
        }
        out
    }

    /// Like [`format`](Self::format), constrained to `max_width` display
    /// columns. Falls back to a compact 1-based `current/total` when the
    /// dots would not fit, and to an empty string when even that does not
    /// fit or there is nothing to show.
    #[must_use]
    pub fn format_for_width(&self, state: &GalleryState, max_width: usize) -> String {
        if state.is_empty() || max_width == 0 {
            return String::new();
        }

        let symbol_width = UnicodeWidthStr::width(self.active_symbol)
            .max(UnicodeWidthStr::width(self.inactive_symbol));
        if symbol_width > 0 && state.len() * symbol_width <= max_width {
            let dots = self.format(state);
            if UnicodeWidthStr::width(dots.as_str()) <= max_width {
                return dots;
            }
        }

        let compact = format!("{}/{}", state.current_index() + 1, state.len());
        if UnicodeWidthStr::width(compact.as_str()) <= max_width {
            compact
        } else {
            String::new()
        }
    }
}
