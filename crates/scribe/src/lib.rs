//! Scribe - Channel transcript generation
//!
//! Scribe converts a chat channel's message history into a static,
//! self-contained rendered document. It retrieves an unbounded,
//! cursor-paginated history in chronological order and converts each
//! message's rich-text content (Discord-flavored markdown, reference
//! tokens, nested interactive components, embeds, attachments) into safe,
//! structurally faithful markup.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scribe::{ChannelId, DiscordRestClient, TranscriptOptions, create_transcript};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiscordRestClient::new(std::env::var("DISCORD_TOKEN")?);
//!     let options = TranscriptOptions {
//!         guild_name: "Speed HQ".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let transcript = create_transcript(
//!         &client,
//!         ChannelId::new(111111111111111111),
//!         &options,
//!         &my_renderer,
//!     )
//!     .await?;
//!
//!     std::fs::write(transcript.file_name(), transcript.body().as_bytes())?;
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `discord` - Discord REST adapter
//!
//! # Architecture
//!
//! Scribe is organized as a workspace with focused crates:
//!
//! - `scribe_error` - Error types
//! - `scribe_core` - Message data model and resolver tables
//! - `scribe_format` - Escaping, reference resolution, markdown, system text
//! - `scribe_transcript` - View models, history retrieval, transcript assembly
//! - `scribe_discord` - Discord REST adapter
//!
//! This crate (`scribe`) re-exports everything for convenience.

// Re-export core crates (always available)
pub use scribe_core::*;
pub use scribe_error::*;
pub use scribe_format::*;
pub use scribe_transcript::*;

// Re-export the Discord adapter (feature-gated)
#[cfg(feature = "discord")]
pub use scribe_discord::*;
