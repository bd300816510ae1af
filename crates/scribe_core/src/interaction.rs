//! Command-invocation record.

use crate::Author;
use serde::{Deserialize, Serialize};

/// The interaction that produced a message, when the message is a command
/// response.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Interaction {
    /// Interaction type tag (required)
    #[serde(rename = "type")]
    kind: u8,
    /// Invoked command name (required)
    name: String,
    /// User who invoked the command (required)
    user: Author,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "type": 2,
            "name": "ban",
            "user": {"id": "1", "username": "mod"}
        }"#;

        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(*interaction.kind(), 2);
        assert_eq!(interaction.name(), "ban");
        assert_eq!(interaction.user().username(), "mod");
    }
}
