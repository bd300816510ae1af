//! View-model mapping and history retrieval for Scribe.
//!
//! This crate turns raw channel history into renderable view models:
//! - `collect_history` assembles the complete, chronologically ordered
//!   message set over a `MessageSource` capability;
//! - the mappers convert each message (embeds, attachments, stickers,
//!   component trees, system events) into one immutable
//!   `RenderableMessage`;
//! - `build_transcript` orchestrates the pipeline into a `TranscriptData`
//!   ready for an external `TranscriptRenderer`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdn;
mod components;
mod embeds;
mod gif;
mod history;
mod message;
mod options;
mod source;
mod transcript;
mod view;

pub use cdn::{avatar_url, sticker_url};
pub use components::map_components;
pub use embeds::{classify_embeds, map_attachment, map_embed, map_sticker};
pub use gif::{DEFAULT_GIF_PROVIDERS, GifDetector};
pub use history::{MessageLimit, PAGE_SIZE, collect_history};
pub use message::map_message;
pub use options::{OutputKind, TranscriptOptions};
pub use source::MessageSource;
pub use transcript::{
    Transcript, TranscriptBody, TranscriptData, TranscriptRenderer, build_transcript,
};
pub use view::{
    ButtonStyle, CommandInfo, RenderableAttachment, RenderableComponent, RenderableEmbed,
    RenderableEmoji, RenderableField, RenderableMessage, RenderableSticker,
};
