//! Adapter-level serde models for channel and guild metadata.
//!
//! Separate from the message models in `scribe_core` because they only
//! exist to drive the adapter: channel validation and resolver-table
//! population.

use scribe_core::{ChannelId, GuildId, RoleId};
use serde::{Deserialize, Serialize};

// Wire tags for direct-message channel kinds.
const CHANNEL_KIND_DM: u8 = 1;
const CHANNEL_KIND_GROUP_DM: u8 = 3;

/// Channel metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct ChannelData {
    /// Channel snowflake ID (required)
    id: ChannelId,
    /// Channel type tag (required)
    #[serde(rename = "type")]
    kind: u8,

    /// Channel name (optional; DM channels have none)
    #[serde(default)]
    name: Option<String>,
    /// Parent guild ID (optional)
    #[serde(default)]
    guild_id: Option<GuildId>,
}

impl ChannelData {
    /// True for direct-message-style channels, which cannot be archived.
    pub fn is_direct_message(&self) -> bool {
        matches!(self.kind, CHANNEL_KIND_DM | CHANNEL_KIND_GROUP_DM)
    }

    /// The channel name for headers and file names.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown-channel")
    }
}

/// Role metadata used to populate the resolver tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct RoleData {
    /// Role snowflake ID (required)
    id: RoleId,
    /// Role name (required)
    name: String,
    /// RGB color as a decimal integer; zero means no color
    #[serde(default)]
    color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_guild_text_channel() {
        let json = r#"{
            "id": "111111111111111111",
            "type": 0,
            "name": "general",
            "guild_id": "123456789012345678"
        }"#;

        let channel: ChannelData = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id().get(), 111111111111111111);
        assert!(!channel.is_direct_message());
        assert_eq!(channel.display_name(), "general");
        assert_eq!(channel.guild_id(), &Some(GuildId::new(123456789012345678)));
    }

    #[test]
    fn test_dm_channels_are_detected() {
        let dm: ChannelData = serde_json::from_str(r#"{"id": "1", "type": 1}"#).unwrap();
        let group: ChannelData = serde_json::from_str(r#"{"id": "2", "type": 3}"#).unwrap();
        let thread: ChannelData = serde_json::from_str(r#"{"id": "3", "type": 11}"#).unwrap();

        assert!(dm.is_direct_message());
        assert!(group.is_direct_message());
        assert!(!thread.is_direct_message());
    }

    #[test]
    fn test_nameless_channel_display_name() {
        let channel: ChannelData = serde_json::from_str(r#"{"id": "1", "type": 1}"#).unwrap();
        assert_eq!(channel.display_name(), "unknown-channel");
    }

    #[test]
    fn test_deserialize_role() {
        let json = r#"{
            "id": "333333333333333333",
            "name": "Moderator",
            "color": 3447003
        }"#;

        let role: RoleData = serde_json::from_str(json).unwrap();
        assert_eq!(role.name(), "Moderator");
        assert_eq!(*role.color(), 3447003);
    }
}
