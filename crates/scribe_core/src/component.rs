//! Raw interactive-component tree model.
//!
//! Messages carry a nested tree of display and interactive components.
//! This model keeps the wire shape: one node type with an integer `type`
//! discriminator and every optional field any recognized variant uses.
//! The transcript pipeline turns these into a closed tagged-variant tree;
//! unrecognized discriminators survive deserialization untouched so new
//! component kinds degrade gracefully downstream.

use crate::EmojiId;
use serde::{Deserialize, Serialize};

/// A raw component node as delivered in the message payload.
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
pub struct ComponentNode {
    /// Integer type discriminator (required)
    #[serde(rename = "type")]
    kind: u8,

    /// Stable numeric identifier within the message (optional)
    #[serde(default)]
    #[builder(default)]
    id: Option<u64>,
    /// Developer-defined identifier for interactions (optional)
    #[serde(default)]
    #[builder(default)]
    custom_id: Option<String>,
    /// Style tag for buttons (optional)
    #[serde(default)]
    #[builder(default)]
    style: Option<u8>,
    /// Button label (optional)
    #[serde(default)]
    #[builder(default)]
    label: Option<String>,
    /// Button emoji (optional)
    #[serde(default)]
    #[builder(default)]
    emoji: Option<PartialEmoji>,
    /// Interaction disabled flag
    #[serde(default)]
    #[builder(default)]
    disabled: bool,
    /// External link for link-style buttons (optional)
    #[serde(default)]
    #[builder(default)]
    url: Option<String>,
    /// Markdown content for text nodes (optional)
    #[serde(default)]
    #[builder(default)]
    content: Option<String>,
    /// Accent color for containers, decimal RGB (optional)
    #[serde(default)]
    #[builder(default)]
    accent_color: Option<u32>,
    /// Spoiler flag for containers
    #[serde(default)]
    #[builder(default)]
    spoiler: bool,
    /// Spacing size for separators (optional)
    #[serde(default)]
    #[builder(default)]
    spacing: Option<u8>,
    /// Visible divider flag for separators (optional)
    #[serde(default)]
    #[builder(default)]
    divider: Option<bool>,
    /// Child nodes for containers and action rows
    #[serde(default)]
    #[builder(default)]
    components: Vec<ComponentNode>,
}

/// Emoji reference carried by a button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct PartialEmoji {
    /// Custom emoji snowflake ID (absent for unicode emoji)
    #[serde(default)]
    id: Option<EmojiId>,
    /// Emoji name or unicode character (optional)
    #[serde(default)]
    name: Option<String>,
    /// True for animated custom emoji
    #[serde(default)]
    animated: bool,
}

impl PartialEmoji {
    /// Create an emoji reference.
    pub fn new(id: Option<EmojiId>, name: Option<String>, animated: bool) -> Self {
        Self { id, name, animated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_button() {
        let json = r#"{
            "type": 2,
            "id": 3,
            "style": 5,
            "label": "Docs",
            "url": "https://example.com/docs",
            "emoji": {"name": "📘"}
        }"#;

        let node: ComponentNode = serde_json::from_str(json).unwrap();
        assert_eq!(*node.kind(), 2);
        assert_eq!(*node.id(), Some(3));
        assert_eq!(node.label(), &Some("Docs".to_string()));
        assert_eq!(node.emoji().as_ref().unwrap().name(), &Some("📘".to_string()));
        assert!(node.components().is_empty());
    }

    #[test]
    fn test_deserialize_nested_container() {
        let json = r#"{
            "type": 17,
            "accent_color": 5793266,
            "spoiler": true,
            "components": [
                {"type": 10, "content": "hello"},
                {"type": 14, "spacing": 2, "divider": true}
            ]
        }"#;

        let node: ComponentNode = serde_json::from_str(json).unwrap();
        assert_eq!(*node.kind(), 17);
        assert!(*node.spoiler());
        assert_eq!(node.components().len(), 2);
        assert_eq!(
            node.components()[0].content(),
            &Some("hello".to_string())
        );
        assert_eq!(*node.components()[1].divider(), Some(true));
    }

    #[test]
    fn test_unknown_type_survives() {
        let json = r#"{"type": 99, "id": 1}"#;
        let node: ComponentNode = serde_json::from_str(json).unwrap();
        assert_eq!(*node.kind(), 99);
    }
}
