//! Embed, attachment, and sticker mapping.

use crate::{
    GifDetector, RenderableAttachment, RenderableEmbed, RenderableField, RenderableSticker,
    cdn::sticker_url,
};
use scribe_core::{Attachment, Embed, Sticker};
use scribe_format::RichTextFormatter;

const DEFAULT_EMBED_COLOR: &str = "#7289da";

/// Map one embed through the formatting pipeline.
///
/// Text fields are formatted; URLs pass through raw; the accent color
/// becomes a six-hex-digit string with the classic blurple default.
pub fn map_embed(embed: &Embed, formatter: &RichTextFormatter) -> RenderableEmbed {
    RenderableEmbed {
        title: embed.title().as_deref().map(|text| formatter.format(text)),
        description: embed
            .description()
            .as_deref()
            .map(|text| formatter.format(text)),
        author_name: embed
            .author()
            .as_ref()
            .map(|author| formatter.format(author.name())),
        footer_text: embed
            .footer()
            .as_ref()
            .map(|footer| formatter.format(footer.text())),
        color: match embed.color() {
            Some(color) => format!("#{color:06x}"),
            None => DEFAULT_EMBED_COLOR.to_string(),
        },
        fields: embed
            .fields()
            .iter()
            .map(|field| RenderableField {
                name: formatter.format(field.name()),
                value: formatter.format(field.value()),
                inline: *field.inline(),
            })
            .collect(),
        image_url: embed.image().as_ref().map(|media| media.url().clone()),
        thumbnail_url: embed.thumbnail().as_ref().map(|media| media.url().clone()),
        source_url: embed.url().clone(),
    }
}

/// Partition a message's embeds into regular renderables and extracted GIF
/// URLs.
///
/// A GIF-provider embed never appears in the regular output; it
/// contributes exactly one URL (image preferred, thumbnail fallback) to
/// the GIF collection. Order is preserved on both sides.
pub fn classify_embeds(
    embeds: &[Embed],
    formatter: &RichTextFormatter,
    detector: &GifDetector,
) -> (Vec<RenderableEmbed>, Vec<String>) {
    let mut regular = Vec::new();
    let mut gif_urls = Vec::new();
    for embed in embeds {
        if detector.is_gif_embed(embed) {
            if let Some(url) = detector.extract_url(embed) {
                gif_urls.push(url);
            }
        } else {
            regular.push(map_embed(embed, formatter));
        }
    }
    (regular, gif_urls)
}

/// Map an attachment, deriving content-kind flags from its MIME prefix.
pub fn map_attachment(attachment: &Attachment) -> RenderableAttachment {
    let mime = attachment.content_type().as_deref().unwrap_or_default();
    RenderableAttachment {
        name: attachment.filename().clone(),
        url: attachment.url().clone(),
        is_image: mime.starts_with("image/"),
        is_video: mime.starts_with("video/"),
        is_audio: mime.starts_with("audio/"),
    }
}

/// Map a sticker to its CDN URL and animation flag.
pub fn map_sticker(sticker: &Sticker) -> RenderableSticker {
    RenderableSticker {
        name: sticker.name().clone(),
        url: sticker_url(sticker),
        is_animated: sticker.format_type().is_animated(),
    }
}
