#![forbid(unsafe_code)]

//! Project records.
//!
//! A [`ProjectRecord`] is one entry in the portfolio catalog. Records are
//! read-only once loaded; the filter and gallery operate by derivation and
//! never mutate them. Only `title` and `category` are required — every other
//! field defaults when the dataset omits it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::image::ImageField;
use crate::slug::derive_slug;

/// Display rating value: datasets carry either a number or a text label.
/// Not validated and never filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    /// Numeric rating, e.g. `4.8`.
    Number(f64),
    /// Textual rating, e.g. `"5 stars"`.
    Text(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Client attribution attached to a record. `feedback` doubles as the
/// description fallback on cards; it is display-only and never searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    /// Client display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Quoted client feedback.
    #[serde(default)]
    pub feedback: Option<String>,
}

/// One project in the portfolio catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Display name; always present. Source of the derived slug.
    pub title: String,
    /// Stored slug; takes precedence over the derived one when non-empty.
    #[serde(default)]
    pub slug: Option<String>,
    /// Short description; searchable.
    #[serde(default)]
    pub description: Option<String>,
    /// Long-form description for the detail view. Not searched.
    #[serde(default)]
    pub detailed_description: Option<String>,
    /// Project objectives, shown as a list on the detail view.
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Technology labels, shown on the detail sidebar. Not searched.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Display date or duration text.
    #[serde(default)]
    pub date: Option<String>,
    /// Ordered tag labels; searchable.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Exact-match facet label from the fixed category vocabulary.
    pub category: String,
    /// Platform label; informational only.
    #[serde(default)]
    pub platform: Option<String>,
    /// Raw image field; see [`ImageField`].
    #[serde(default)]
    pub image: ImageField,
    /// Featured display flag.
    #[serde(default)]
    pub featured: bool,
    /// Display rating.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// External live-site URL.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Client attribution.
    #[serde(default)]
    pub client: Option<ClientRef>,
}

/// Fallback text when a record has neither a description nor client feedback.
pub const NO_DESCRIPTION: &str = "No description available.";

impl ProjectRecord {
    /// Create a minimal record with the given title and category.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Set the stored slug (builder).
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the description (builder).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tags (builder).
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Set the image list (builder).
    #[must_use]
    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.image = ImageField::Many(images.iter().map(|i| (*i).to_string()).collect());
        self
    }

    /// Set the client attribution (builder).
    #[must_use]
    pub fn with_client(mut self, client: ClientRef) -> Self {
        self.client = Some(client);
        self
    }

    /// The slug routing to this record's detail view: the stored slug when
    /// present and non-empty, otherwise derived from the title.
    #[must_use]
    pub fn effective_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => derive_slug(&self.title),
        }
    }

    /// Card description with the observed fallback precedence: description,
    /// else client feedback, else a fixed placeholder. Display-only — the
    /// search predicate matches `description` alone.
    #[must_use]
    pub fn display_description(&self) -> &str {
        if let Some(description) = self.description.as_deref() {
            return description;
        }
        if let Some(feedback) = self.client.as_ref().and_then(|c| c.feedback.as_deref()) {
            return feedback;
        }
        NO_DESCRIPTION
    }

    /// The first `limit` tags plus the count of tags hidden behind a "+N"
    /// overflow indicator (0 when everything fits).
    #[must_use]
    pub fn visible_tags(&self, limit: usize) -> (&[String], usize) {
        let shown = limit.min(self.tags.len());
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_slug_prefers_stored() {
        let record = ProjectRecord::new("My App", "Web").with_slug("custom-slug");
        assert_eq!(record.effective_slug(), "custom-slug");
    }

    #[test]
    fn effective_slug_derives_when_absent() {
        let record = ProjectRecord::new("My Cool App", "Web");
        assert_eq!(record.effective_slug(), "my-cool-app");
    }

    #[test]
    fn effective_slug_ignores_empty_stored() {
        let record = ProjectRecord::new("My App", "Web").with_slug("");
        assert_eq!(record.effective_slug(), "my-app");
    }

    #[test]
    fn display_description_prefers_description() {
        let record = ProjectRecord::new("A", "Web")
            .with_description("the description")
            .with_client(ClientRef {
                name: None,
                feedback: Some("the feedback".into()),
            });
        assert_eq!(record.display_description(), "the description");
    }

    #[test]
    fn display_description_falls_back_to_feedback() {
        let record = ProjectRecord::new("A", "Web").with_client(ClientRef {
            name: Some("Acme".into()),
            feedback: Some("great work".into()),
        });
        assert_eq!(record.display_description(), "great work");
    }

    #[test]
    fn display_description_placeholder() {
        let record = ProjectRecord::new("A", "Web");
        assert_eq!(record.display_description(), NO_DESCRIPTION);
    }

    #[test]
    fn visible_tags_truncates() {
        let record = ProjectRecord::new("A", "Web").with_tags(&["a", "b", "c", "d", "e"]);
        let (shown, overflow) = record.visible_tags(3);
        assert_eq!(shown, ["a", "b", "c"]);
        assert_eq!(overflow, 2);
    }

    #[test]
    fn visible_tags_no_overflow() {
        let record = ProjectRecord::new("A", "Web").with_tags(&["a", "b"]);
        let (shown, overflow) = record.visible_tags(4);
        assert_eq!(shown, ["a", "b"]);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn rating_display() {
        assert_eq!(Rating::Number(4.8).to_string(), "4.8");
        assert_eq!(Rating::Text("5 stars".into()).to_string(), "5 stars");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "title": "Shop",
            "category": "Web",
            "detailedDescription": "long text",
            "liveUrl": "https://example.com",
            "rating": 4.5,
            "image": ["a.png", "b.png"]
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.detailed_description.as_deref(), Some("long text"));
        assert_eq!(record.live_url.as_deref(), Some("https://example.com"));
        assert_eq!(record.rating, Some(Rating::Number(4.5)));
        assert_eq!(record.image.len(), 2);
    }

    #[test]
    fn deserializes_minimal_record() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"title": "X", "category": "Web"}"#).unwrap();
        assert!(record.tags.is_empty());
        assert!(record.image.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn deserializes_text_rating() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"title": "X", "category": "Web", "rating": "5.0"}"#).unwrap();
        assert_eq!(record.rating, Some(Rating::Text("5.0".into())));
    }
}
