//! High-level transcript entry point.

use crate::{ChannelMessages, DiscordRestClient, build_context};
use scribe_core::ChannelId;
use scribe_error::{ChannelError, ChannelErrorKind, ScribeResult};
use scribe_format::LocaleDateFormatter;
use scribe_transcript::{
    OutputKind, Transcript, TranscriptBody, TranscriptOptions, TranscriptRenderer,
    build_transcript,
};
use tracing::{info, instrument};

/// Archive a channel's history into a rendered transcript document.
///
/// Looks up the channel, rejects direct-message-style channels before any
/// history retrieval, builds the resolver tables from the guild, collects
/// and maps the history, renders it through the supplied renderer, and
/// packages the result under `transcript-<channel>.html` in the requested
/// encoding.
///
/// # Errors
///
/// Fails fast on the first retrieval error; there is no partial
/// transcript. Direct-message channels fail with an unsupported-channel
/// error.
#[instrument(skip(client, options, renderer), fields(channel_id = %channel_id))]
pub async fn create_transcript(
    client: &DiscordRestClient,
    channel_id: ChannelId,
    options: &TranscriptOptions,
    renderer: &dyn TranscriptRenderer,
) -> ScribeResult<Transcript> {
    let channel = client.get_channel(channel_id).await?;
    if channel.is_direct_message() {
        return Err(ChannelError::new(ChannelErrorKind::UnsupportedChannelType(
            *channel.kind(),
        ))
        .into());
    }

    info!(channel = channel.display_name(), "Creating transcript");
    let context = build_context(client, &channel).await?;
    let dates = LocaleDateFormatter::new(&options.locale, &options.timezone);
    let source = ChannelMessages::new(client, channel_id);
    let data = build_transcript(&source, channel.display_name(), context, options, &dates).await?;

    let document = renderer.render(&data)?;
    let file_name = format!("transcript-{}.html", channel.display_name());
    let body = match options.output {
        OutputKind::Text => TranscriptBody::Text(document),
        OutputKind::Bytes => TranscriptBody::Bytes(document.into_bytes()),
    };

    info!(file_name = %file_name, "Transcript complete");
    Ok(Transcript::new(file_name, body))
}
