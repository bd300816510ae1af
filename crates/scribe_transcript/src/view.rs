//! Renderable view models.
//!
//! Output of the mapping pipeline, constructed once per message and never
//! mutated afterwards. Everything serializes so any template engine can
//! consume the tree directly.

use scribe_core::EmojiId;
use serde::Serialize;

/// One renderable record per message.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableMessage {
    /// Author display name.
    pub(crate) author: String,
    /// Author avatar URL.
    pub(crate) avatar_url: String,
    /// Formatted markup content, or None when empty or suppressed.
    pub(crate) content: Option<String>,
    /// Formatted creation instant.
    pub(crate) timestamp: String,
    /// Regular embeds, in message order.
    pub(crate) embeds: Vec<RenderableEmbed>,
    /// Attachments, in message order.
    pub(crate) attachments: Vec<RenderableAttachment>,
    /// Stickers, in message order.
    pub(crate) stickers: Vec<RenderableSticker>,
    /// URLs extracted from GIF-provider embeds, in message order.
    pub(crate) gif_urls: Vec<String>,
    /// True when `embeds` is non-empty.
    pub(crate) has_embeds: bool,
    /// True when `attachments` is non-empty.
    pub(crate) has_attachments: bool,
    /// True when `stickers` is non-empty.
    pub(crate) has_stickers: bool,
    /// True when `gif_urls` is non-empty.
    pub(crate) has_gifs: bool,
    /// True when `components` is non-empty.
    pub(crate) has_components: bool,
    /// True when the author is a bot account.
    pub(crate) is_bot: bool,
    /// True when the message is a command response.
    pub(crate) is_command: bool,
    /// True when `system_text` is present.
    pub(crate) is_system_message: bool,
    /// Command metadata for command responses.
    pub(crate) command: Option<CommandInfo>,
    /// System-event narration, when the message narrates a platform event.
    pub(crate) system_text: Option<String>,
    /// Component tree root siblings, in payload order.
    pub(crate) components: Vec<RenderableComponent>,
}

/// Command metadata on a command-response message.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct CommandInfo {
    /// Invoked command name.
    pub(crate) name: String,
    /// Display name of the invoking user.
    pub(crate) user: String,
    /// Avatar URL of the invoking user.
    pub(crate) user_avatar_url: String,
}

/// A renderable embed.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableEmbed {
    /// Formatted title, or None.
    pub(crate) title: Option<String>,
    /// Formatted description, or None.
    pub(crate) description: Option<String>,
    /// Formatted author name, or None.
    pub(crate) author_name: Option<String>,
    /// Formatted footer text, or None.
    pub(crate) footer_text: Option<String>,
    /// Accent color as `#rrggbb`.
    pub(crate) color: String,
    /// Formatted name/value fields, in order.
    pub(crate) fields: Vec<RenderableField>,
    /// Image URL, raw.
    pub(crate) image_url: Option<String>,
    /// Thumbnail URL, raw.
    pub(crate) thumbnail_url: Option<String>,
    /// Source URL, raw.
    pub(crate) source_url: Option<String>,
}

/// A formatted embed field.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableField {
    /// Formatted field name.
    pub(crate) name: String,
    /// Formatted field value.
    pub(crate) value: String,
    /// Render inline with neighboring fields.
    pub(crate) inline: bool,
}

/// A renderable attachment.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableAttachment {
    /// Original file name.
    pub(crate) name: String,
    /// Source URL.
    pub(crate) url: String,
    /// MIME type starts with `image/`.
    pub(crate) is_image: bool,
    /// MIME type starts with `video/`.
    pub(crate) is_video: bool,
    /// MIME type starts with `audio/`.
    pub(crate) is_audio: bool,
}

/// A renderable sticker.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableSticker {
    /// Sticker name.
    pub(crate) name: String,
    /// CDN URL.
    pub(crate) url: String,
    /// True for animated sticker formats.
    pub(crate) is_animated: bool,
}

/// Button presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ButtonStyle {
    /// Blurple call-to-action.
    Primary,
    /// Grey neutral action.
    Secondary,
    /// Green confirmation.
    Success,
    /// Red destructive action.
    Danger,
    /// External link.
    Link,
    /// Premium purchase.
    Premium,
    /// Style tag this library does not recognize.
    Unknown,
}

impl From<u8> for ButtonStyle {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Success,
            4 => Self::Danger,
            5 => Self::Link,
            6 => Self::Premium,
            _ => Self::Unknown,
        }
    }
}

/// Emoji descriptor on a button.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct RenderableEmoji {
    /// Custom emoji snowflake ID, absent for unicode emoji.
    pub(crate) id: Option<EmojiId>,
    /// Emoji name or unicode character.
    pub(crate) name: Option<String>,
    /// True for animated custom emoji.
    pub(crate) animated: bool,
}

/// A mapped interactive component.
///
/// Closed tagged-variant tree over the recognized component kinds, with an
/// `Unknown` case so unrecognized kinds degrade rather than error.
/// Container and action-row children preserve sibling order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderableComponent {
    /// Formatted markdown text block.
    TextBlock {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// Formatted markup content.
        content: String,
    },
    /// Visual grouping of child components.
    Container {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// Accent color as `#rrggbb`, when set.
        accent_color: Option<String>,
        /// Hide content behind a spoiler cover.
        spoiler: bool,
        /// Child components, in order.
        children: Vec<RenderableComponent>,
    },
    /// Vertical spacing, optionally with a visible divider.
    Separator {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// Spacing size tag.
        spacing: u8,
        /// Render a visible divider line.
        divider: bool,
    },
    /// Horizontal row of interactive children.
    ActionRow {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// Child components, in order.
        children: Vec<RenderableComponent>,
    },
    /// A button.
    Button {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// Presentation style.
        style: ButtonStyle,
        /// Button label.
        label: Option<String>,
        /// Developer-defined identifier.
        custom_id: Option<String>,
        /// Interaction disabled flag.
        disabled: bool,
        /// Emoji descriptor.
        emoji: Option<RenderableEmoji>,
        /// External link for link-style buttons.
        url: Option<String>,
    },
    /// Component kind this library does not recognize.
    Unknown {
        /// Stable identifier within the message.
        id: Option<u64>,
        /// The unrecognized discriminator, preserved for diagnostics.
        raw_kind: u8,
    },
}
