//! Message model.

use crate::{Attachment, Author, ComponentNode, Embed, Interaction, MessageId, MessageKind, Sticker};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message from a channel's history.
///
/// Read-only input to the transcript pipeline, deserialized straight from
/// the REST payload. Fields the pipeline does not consume are not modeled.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Message {
    /// Message snowflake ID (required)
    id: MessageId,
    /// Message author (required)
    author: Author,
    /// Creation instant (required)
    timestamp: DateTime<Utc>,

    /// Raw markdown content (may be empty)
    #[serde(default)]
    #[builder(default)]
    content: String,
    /// Event-kind tag
    #[serde(rename = "type", default)]
    #[builder(default)]
    kind: MessageKind,
    /// Rich embeds
    #[serde(default)]
    #[builder(default)]
    embeds: Vec<Embed>,
    /// File attachments
    #[serde(default)]
    #[builder(default)]
    attachments: Vec<Attachment>,
    /// Stickers
    #[serde(default)]
    #[builder(default)]
    sticker_items: Vec<Sticker>,
    /// Interactive-component tree roots
    #[serde(default)]
    #[builder(default)]
    components: Vec<ComponentNode>,
    /// Command-invocation record, present on command responses
    #[serde(default)]
    #[builder(default)]
    interaction: Option<Interaction>,
    /// Users mentioned in the content
    #[serde(default)]
    #[builder(default)]
    mentions: Vec<Author>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": "111111111111111111",
            "author": {"id": "2", "username": "ana"},
            "timestamp": "2024-01-15T14:30:00.123000+00:00"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id().get(), 111111111111111111);
        assert_eq!(message.author().username(), "ana");
        assert_eq!(message.content(), "");
        assert_eq!(*message.kind(), MessageKind::Regular);
        assert!(message.embeds().is_empty());
        assert!(message.interaction().is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": "111111111111111111",
            "author": {"id": "2", "username": "ana", "bot": true},
            "timestamp": "2024-01-15T14:30:00+00:00",
            "content": "**hello**",
            "type": 19,
            "embeds": [{"title": "hi"}],
            "attachments": [
                {"id": "3", "filename": "a.png", "url": "https://cdn.example.com/a.png"}
            ],
            "sticker_items": [{"id": "4", "name": "wave", "format_type": 1}],
            "components": [{"type": 1, "components": [{"type": 2, "label": "Go"}]}],
            "interaction": {"type": 2, "name": "roll", "user": {"id": "5", "username": "gm"}},
            "mentions": [{"id": "6", "username": "ben"}]
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(*message.kind(), MessageKind::Reply);
        assert_eq!(message.embeds().len(), 1);
        assert_eq!(message.attachments().len(), 1);
        assert_eq!(message.sticker_items().len(), 1);
        assert_eq!(message.components().len(), 1);
        assert_eq!(message.interaction().as_ref().unwrap().name(), "roll");
        assert_eq!(message.mentions()[0].id(), &UserId::new(6));
    }

    #[test]
    fn test_builder_defaults() {
        let message = MessageBuilder::default()
            .id(MessageId::new(1))
            .author(
                crate::AuthorBuilder::default()
                    .id(UserId::new(2))
                    .username("ana".to_string())
                    .build()
                    .unwrap(),
            )
            .timestamp("2024-01-15T14:30:00Z".parse().unwrap())
            .build()
            .unwrap();

        assert_eq!(message.content(), "");
        assert_eq!(*message.kind(), MessageKind::Regular);
    }
}
