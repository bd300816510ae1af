//! Message author model.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// The author of a message, as delivered in the message payload.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Author {
    /// User snowflake ID (required)
    id: UserId,
    /// Username without @ (required)
    username: String,

    /// Display name (optional)
    #[serde(default)]
    #[builder(default)]
    global_name: Option<String>,
    /// Avatar hash (optional)
    #[serde(default)]
    #[builder(default)]
    avatar: Option<String>,
    /// True if bot account
    #[serde(default)]
    #[builder(default)]
    bot: bool,
}

impl Author {
    /// The name to present for this author: the display name when set,
    /// the username otherwise.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": "222222222222222222",
            "username": "testuser"
        }"#;

        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.id().get(), 222222222222222222);
        assert_eq!(author.username(), "testuser");
        assert_eq!(author.global_name(), &None);
        assert!(!author.bot());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": "222222222222222222",
            "username": "testuser",
            "global_name": "Test User",
            "avatar": "abc123",
            "bot": true
        }"#;

        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.global_name(), &Some("Test User".to_string()));
        assert_eq!(author.avatar(), &Some("abc123".to_string()));
        assert!(*author.bot());
    }

    #[test]
    fn test_display_name_prefers_global_name() {
        let author = AuthorBuilder::default()
            .id(UserId::new(1))
            .username("mach".to_string())
            .global_name(Some("Mach Five".to_string()))
            .build()
            .unwrap();
        assert_eq!(author.display_name(), "Mach Five");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let author = AuthorBuilder::default()
            .id(UserId::new(1))
            .username("mach".to_string())
            .build()
            .unwrap();
        assert_eq!(author.display_name(), "mach");
    }
}
