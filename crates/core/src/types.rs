//! Domain types for AI-generated presentation content.
//!
//! Field names follow the JSON contract the provider is prompted to emit
//! (`responseMessage`, `presentationData`, camelCase throughout).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of trailing conversation messages supplied to the prompt builder.
pub const CONTEXT_WINDOW: usize = 5;

/// A complete structured presentation as accepted from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Deck title. Non-empty once validated.
    pub title: String,

    /// Slides in presentation order. Non-empty once validated; the first
    /// slide always uses the `title` layout.
    pub slides: Vec<Slide>,

    /// Conversational confirmation the provider attached to the deck.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
}

impl Presentation {
    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The assistant-facing confirmation sentence. Falls back to a
    /// synthesized one from the title and slide count when the provider
    /// supplied none.
    pub fn confirmation(&self) -> String {
        match &self.response_message {
            Some(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => format!(
                "I've created \"{}\" with {} slides for you!",
                self.title,
                self.slides.len()
            ),
        }
    }
}

/// A single slide: title, ordered bullet strings, and layout tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide heading.
    #[serde(default)]
    pub title: String,

    /// Ordered content strings. At most one (the subtitle) is used by the
    /// `title` and `section` layouts; `content` slides carry bullets.
    #[serde(default)]
    pub content: Vec<String>,

    /// Visual template for this slide.
    #[serde(default)]
    pub layout: SlideLayout,
}

impl Slide {
    /// Create a slide with the given layout and no content.
    pub fn new(title: impl Into<String>, layout: SlideLayout) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            layout,
        }
    }

    /// Create a slide with content strings.
    pub fn with_content<S: Into<String>>(
        title: impl Into<String>,
        layout: SlideLayout,
        content: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into_iter().map(Into::into).collect(),
            layout,
        }
    }
}

/// The closed set of slide layouts.
///
/// Unrecognized tags deserialize to [`SlideLayout::Content`]: rendering
/// dispatch fails open to the plain content template rather than
/// rejecting a deck over an unknown tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    /// Opening slide: large centered heading with optional subtitle.
    Title,
    /// Topic-transition divider: centered heading on a tinted background.
    Section,
    /// Standard slide: title bar plus numbered bullets.
    #[default]
    #[serde(other)]
    Content,
}

impl SlideLayout {
    /// Map a wire tag to a layout, falling open to `Content` for
    /// anything unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => Self::Title,
            "section" => Self::Section,
            _ => Self::Content,
        }
    }

    /// The wire tag for this layout.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Section => "section",
            Self::Content => "content",
        }
    }
}

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One immutable conversation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message author.
    pub role: Role,

    /// Free-text body.
    pub content: String,

    /// When the message was appended.
    pub timestamp: DateTime<Utc>,

    /// The full presentation accepted for this turn (assistant messages
    /// on successful generations only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation_data: Option<Presentation>,
}

impl Message {
    /// A user message with the current timestamp.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            presentation_data: None,
        }
    }

    /// An assistant message carrying the accepted presentation payload.
    pub fn assistant(content: impl Into<String>, presentation: Presentation) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            presentation_data: Some(presentation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_tags_round_trip() {
        for layout in [SlideLayout::Title, SlideLayout::Section, SlideLayout::Content] {
            assert_eq!(SlideLayout::from_tag(layout.tag()), layout);
        }
    }

    #[test]
    fn test_unknown_layout_tag_falls_open_to_content() {
        assert_eq!(SlideLayout::from_tag("two_column"), SlideLayout::Content);
        let slide: Slide =
            serde_json::from_str(r#"{"title":"x","content":[],"layout":"quote"}"#).unwrap();
        assert_eq!(slide.layout, SlideLayout::Content);
    }

    #[test]
    fn test_slide_defaults_for_missing_fields() {
        let slide: Slide = serde_json::from_str(r#"{"title":"Agenda"}"#).unwrap();
        assert!(slide.content.is_empty());
        assert_eq!(slide.layout, SlideLayout::Content);
    }

    #[test]
    fn test_confirmation_falls_back_to_synthesized_sentence() {
        let deck = Presentation {
            title: "Onboarding".to_string(),
            slides: vec![Slide::new("Onboarding", SlideLayout::Title)],
            response_message: None,
        };
        assert_eq!(
            deck.confirmation(),
            "I've created \"Onboarding\" with 1 slides for you!"
        );

        let deck = Presentation {
            response_message: Some("Here you go.".to_string()),
            ..deck
        };
        assert_eq!(deck.confirmation(), "Here you go.");
    }

    #[test]
    fn test_presentation_serializes_camel_case() {
        let deck = Presentation {
            title: "T".to_string(),
            slides: vec![Slide::new("T", SlideLayout::Title)],
            response_message: Some("done".to_string()),
        };
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["responseMessage"], "done");
        assert_eq!(json["slides"][0]["layout"], "title");
    }
}
