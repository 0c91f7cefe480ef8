//! Suggestion records handed out by suggestion providers

use serde::Deserialize;

/// A single autocomplete candidate
///
/// `kind` is a free-form category tag ("channel", "video", ...). An empty
/// kind means the row is rendered without an icon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub value: String,
    #[serde(default)]
    pub kind: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
        }
    }

    /// Icon glyph for this suggestion's category, if it has one
    pub fn icon(&self) -> Option<&'static str> {
        icon_for_kind(&self.kind)
    }
}

/// Map a category tag to the glyph drawn in front of the row text
///
/// Unknown but non-empty categories still get a generic bullet so that every
/// tagged row lines up with the others.
pub fn icon_for_kind(kind: &str) -> Option<&'static str> {
    match kind {
        "" => None,
        "channel" => Some("◉"),
        "video" => Some("▶"),
        "playlist" => Some("≡"),
        "category" => Some("#"),
        "history" => Some("↺"),
        _ => Some("•"),
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
