//! Transcript request parameters.

use crate::{DEFAULT_GIF_PROVIDERS, MessageLimit};
use serde::{Deserialize, Serialize};

/// Parameters accepted by the transcript entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptOptions {
    /// Guild display name for the document header.
    #[serde(default = "default_guild_name")]
    pub guild_name: String,

    /// Locale tag for date formatting.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Timezone identifier for date formatting.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// How much history to retrieve.
    #[serde(default)]
    pub limit: MessageLimit,

    /// Output encoding of the rendered document.
    #[serde(default)]
    pub output: OutputKind,

    /// GIF-provider signatures for embed extraction.
    #[serde(default = "default_gif_providers")]
    pub gif_providers: Vec<String>,
}

fn default_guild_name() -> String {
    "Unknown Guild".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_gif_providers() -> Vec<String> {
    DEFAULT_GIF_PROVIDERS.iter().map(|s| s.to_string()).collect()
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self {
            guild_name: default_guild_name(),
            locale: default_locale(),
            timezone: default_timezone(),
            limit: MessageLimit::default(),
            output: OutputKind::default(),
            gif_providers: default_gif_providers(),
        }
    }
}

/// Output encoding of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// A text string.
    #[default]
    Text,
    /// A binary buffer of the same text.
    Bytes,
}
