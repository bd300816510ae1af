//! Discord REST adapter for Scribe.
//!
//! Implements the transcript pipeline's capabilities against the Discord
//! REST API:
//! - `DiscordRestClient` performs authenticated GET requests and maps
//!   failures into the retrieval error taxonomy;
//! - `ChannelMessages` adapts cursor pagination of a channel's history to
//!   the `MessageSource` capability;
//! - `build_context` populates the resolver tables from guild roles and
//!   channels;
//! - `create_transcript` is the high-level entry point: validate the
//!   channel, collect and map its history, render, and package the
//!   document.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod context;
mod models;
mod source;
mod transcript;

pub use client::DiscordRestClient;
pub use context::build_context;
pub use models::{ChannelData, RoleData};
pub use source::ChannelMessages;
pub use transcript::create_transcript;
