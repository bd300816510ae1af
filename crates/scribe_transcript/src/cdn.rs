//! CDN URL construction.

use scribe_core::{Author, Sticker, StickerFormat};

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Avatar URL for an author.
///
/// Custom avatars live under the user's id and hash; animated hashes carry
/// an `a_` prefix and serve as GIF. Users without a custom avatar get one
/// of the default avatars, indexed from their id.
pub fn avatar_url(author: &Author) -> String {
    match author.avatar() {
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!(
                "{CDN_BASE}/avatars/{}/{}.{}?size=128",
                author.id(),
                hash,
                ext
            )
        }
        None => format!("{CDN_BASE}/embed/avatars/{}.png", (author.id().get() >> 22) % 6),
    }
}

/// CDN URL for a sticker, by format.
pub fn sticker_url(sticker: &Sticker) -> String {
    match sticker.format_type() {
        StickerFormat::Lottie => format!("{CDN_BASE}/stickers/{}.json", sticker.id()),
        StickerFormat::Gif => {
            // GIF stickers are served from the media proxy, not the CDN.
            format!("https://media.discordapp.net/stickers/{}.gif", sticker.id())
        }
        _ => format!("{CDN_BASE}/stickers/{}.png", sticker.id()),
    }
}
