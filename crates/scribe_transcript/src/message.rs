//! Message view-model mapping.

use crate::{
    CommandInfo, GifDetector, RenderableMessage, cdn::avatar_url, classify_embeds, map_attachment,
    map_components, map_sticker,
};
use scribe_core::{Message, MessageKind};
use scribe_format::{RichTextFormatter, system_text};

/// Map one message into its renderable record.
///
/// Pure function of the message plus the read-only formatting state; the
/// record is never mutated after construction.
pub fn map_message(
    message: &Message,
    formatter: &RichTextFormatter,
    detector: &GifDetector,
) -> RenderableMessage {
    let author = message.author();

    let (embeds, gif_urls) = classify_embeds(message.embeds(), formatter, detector);
    let attachments: Vec<_> = message.attachments().iter().map(map_attachment).collect();
    let stickers: Vec<_> = message.sticker_items().iter().map(map_sticker).collect();
    let components = map_components(message.components(), formatter);

    let system_text = system_text(
        *message.kind(),
        author.display_name(),
        message.mentions().first().map(|user| user.display_name()),
        Some(message.content()),
    );

    // Content that is exactly a GIF viewer link duplicates the extracted
    // GIF, so it is suppressed.
    let trimmed = message.content().trim();
    let content = if trimmed.is_empty() || detector.is_viewer_link(trimmed) {
        None
    } else {
        Some(formatter.format(message.content()))
    };

    let command = message.interaction().as_ref().map(|interaction| CommandInfo {
        name: interaction.name().clone(),
        user: interaction.user().display_name().to_string(),
        user_avatar_url: avatar_url(interaction.user()),
    });
    let is_command = command.is_some()
        || matches!(
            *message.kind(),
            MessageKind::ChatInputCommand | MessageKind::ContextMenuCommand
        );

    RenderableMessage {
        author: author.display_name().to_string(),
        avatar_url: avatar_url(author),
        content,
        timestamp: formatter.dates().format(message.timestamp()),
        has_embeds: !embeds.is_empty(),
        has_attachments: !attachments.is_empty(),
        has_stickers: !stickers.is_empty(),
        has_gifs: !gif_urls.is_empty(),
        has_components: !components.is_empty(),
        is_bot: *author.bot(),
        is_command,
        is_system_message: system_text.is_some(),
        embeds,
        attachments,
        stickers,
        gif_urls,
        command,
        system_text,
        components,
    }
}
