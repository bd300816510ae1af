//! Transcript assembly.

use crate::{
    GifDetector, MessageSource, RenderableMessage, TranscriptOptions, collect_history, map_message,
};
use chrono::Utc;
use scribe_core::ResolverContext;
use scribe_error::ScribeResult;
use scribe_format::{DateFormatter, RichTextFormatter};
use serde::Serialize;
use tracing::{info, instrument};

/// The single mapping handed to the template renderer.
#[derive(Debug, Clone, Serialize, derive_getters::Getters)]
pub struct TranscriptData {
    /// Channel display name.
    channel_name: String,
    /// Guild display name.
    guild_name: String,
    /// Formatted creation instant of the document.
    created_at_full: String,
    /// Formatted closing instant of the document.
    closed_at_full: String,
    /// Messages in chronological order.
    messages: Vec<RenderableMessage>,
}

/// Capability for turning a `TranscriptData` into a markup document.
///
/// A pure function of its input; the template syntax and output schema are
/// the implementation's contract, not Scribe's. Implementations report
/// their own failures through the foundation kinds in `scribe_error`
/// (`JsonError` for serialization issues, `ConfigError` for bad templates,
/// `HttpError` for remote template stores).
pub trait TranscriptRenderer: Send + Sync {
    /// Render the transcript mapping into a markup document.
    fn render(&self, data: &TranscriptData) -> ScribeResult<String>;
}

/// Rendered transcript body, per the requested output encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptBody {
    /// The document as a text string.
    Text(String),
    /// The document as a binary buffer of the same text.
    Bytes(Vec<u8>),
}

impl TranscriptBody {
    /// The body as text, when text was requested.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes(_) => None,
        }
    }

    /// The body bytes, regardless of encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

/// A finished transcript document.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Transcript {
    /// Suggested file name for the document.
    file_name: String,
    /// Rendered document body.
    body: TranscriptBody,
}

impl Transcript {
    /// Package a rendered document.
    pub fn new(file_name: impl Into<String>, body: TranscriptBody) -> Self {
        Self {
            file_name: file_name.into(),
            body,
        }
    }
}

/// Collect and map a channel's history into a renderable transcript
/// mapping.
///
/// `context` supplies the caller-curated resolver tables; user entries for
/// everyone mentioned in the retrieved history are absorbed into it before
/// mapping. Mapping each message is pure, so ordering of the output
/// follows the collected history regardless of how callers might schedule
/// the work.
#[instrument(
    skip(source, context, options, dates),
    fields(channel = %channel_name, message_count)
)]
pub async fn build_transcript(
    source: &dyn MessageSource,
    channel_name: &str,
    mut context: ResolverContext,
    options: &TranscriptOptions,
    dates: &dyn DateFormatter,
) -> ScribeResult<TranscriptData> {
    info!("Collecting channel history");
    let history = collect_history(source, options.limit).await?;
    context.absorb_mentions(&history);

    let detector = GifDetector::new(options.gif_providers.clone());
    let formatter = RichTextFormatter::new(&context, dates);
    let messages: Vec<RenderableMessage> = history
        .iter()
        .map(|message| map_message(message, &formatter, &detector))
        .collect();

    tracing::Span::current().record("message_count", messages.len());
    info!(message_count = messages.len(), "Mapped channel history");

    let stamp = dates.format(&Utc::now());
    Ok(TranscriptData {
        channel_name: channel_name.to_string(),
        guild_name: options.guild_name.clone(),
        created_at_full: stamp.clone(),
        closed_at_full: stamp,
        messages,
    })
}
