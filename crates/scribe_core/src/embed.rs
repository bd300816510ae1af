//! Embed models.

use serde::{Deserialize, Serialize};

/// A rich embed attached to a message.
#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Embed {
    /// Embed title (optional)
    #[serde(default)]
    #[builder(default)]
    title: Option<String>,
    /// Embed description (optional)
    #[serde(default)]
    #[builder(default)]
    description: Option<String>,
    /// Source URL the embed points at (optional)
    #[serde(default)]
    #[builder(default)]
    url: Option<String>,
    /// Accent color as a decimal integer (optional)
    #[serde(default)]
    #[builder(default)]
    color: Option<u32>,
    /// Author block (optional)
    #[serde(default)]
    #[builder(default)]
    author: Option<EmbedAuthor>,
    /// Footer block (optional)
    #[serde(default)]
    #[builder(default)]
    footer: Option<EmbedFooter>,
    /// Image block (optional)
    #[serde(default)]
    #[builder(default)]
    image: Option<EmbedMedia>,
    /// Thumbnail block (optional)
    #[serde(default)]
    #[builder(default)]
    thumbnail: Option<EmbedMedia>,
    /// Ordered name/value fields
    #[serde(default)]
    #[builder(default)]
    fields: Vec<EmbedField>,
}

/// Embed author block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EmbedAuthor {
    /// Author display name
    name: String,
    /// Link behind the author name (optional)
    #[serde(default)]
    url: Option<String>,
}

impl EmbedAuthor {
    /// Create an author block.
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// Embed footer block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EmbedFooter {
    /// Footer text
    text: String,
}

impl EmbedFooter {
    /// Create a footer block.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Image or thumbnail block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EmbedMedia {
    /// Media source URL
    url: String,
}

impl EmbedMedia {
    /// Create a media block.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A single name/value field inside an embed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EmbedField {
    /// Field name
    name: String,
    /// Field value
    value: String,
    /// Render the field inline with its neighbors
    #[serde(default)]
    inline: bool,
}

impl EmbedField {
    /// Create a field.
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let embed: Embed = serde_json::from_str("{}").unwrap();
        assert_eq!(embed.title(), &None);
        assert!(embed.fields().is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "title": "Release notes",
            "description": "What changed this week",
            "url": "https://example.com/notes",
            "color": 3447003,
            "author": {"name": "The Team"},
            "footer": {"text": "page 1 of 2"},
            "image": {"url": "https://example.com/banner.png"},
            "thumbnail": {"url": "https://example.com/icon.png"},
            "fields": [
                {"name": "Added", "value": "things", "inline": true},
                {"name": "Removed", "value": "other things"}
            ]
        }"#;

        let embed: Embed = serde_json::from_str(json).unwrap();
        assert_eq!(embed.title(), &Some("Release notes".to_string()));
        assert_eq!(embed.color(), &Some(3447003));
        assert_eq!(embed.author().as_ref().unwrap().name(), "The Team");
        assert_eq!(embed.fields().len(), 2);
        assert!(*embed.fields()[0].inline());
        assert!(!embed.fields()[1].inline());
    }
}
