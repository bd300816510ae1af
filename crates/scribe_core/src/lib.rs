//! Core data types for the Scribe transcript library.
//!
//! This crate provides the read-only input model consumed by the transcript
//! pipeline: serde models mirroring the Discord REST message payload, the
//! resolver lookup tables, and telemetry initialization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod component;
mod context;
mod embed;
mod id;
mod interaction;
mod kind;
mod message;
mod sticker;
mod telemetry;
mod user;

pub use attachment::{Attachment, AttachmentBuilder};
pub use component::{ComponentNode, ComponentNodeBuilder, PartialEmoji};
pub use context::{ResolverContext, RoleInfo};
pub use embed::{Embed, EmbedAuthor, EmbedBuilder, EmbedField, EmbedFooter, EmbedMedia};
pub use id::{AttachmentId, ChannelId, EmojiId, GuildId, MessageId, RoleId, StickerId, UserId};
pub use interaction::{Interaction, InteractionBuilder};
pub use kind::MessageKind;
pub use message::{Message, MessageBuilder};
pub use sticker::{Sticker, StickerBuilder, StickerFormat};
pub use telemetry::{init_telemetry, shutdown_telemetry};
pub use user::{Author, AuthorBuilder};
