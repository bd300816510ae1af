//! GIF-provider embed detection.
//!
//! Some embeds exist only to display an animated image from an external
//! provider. The transcript extracts those as first-class data instead of
//! rendering them as regular embeds. Detection is a substring match
//! against a configurable list of provider fragments; the default set
//! covers the providers the platform itself proxies, and callers extend
//! the list through `TranscriptOptions`.

use scribe_core::Embed;

/// Default provider signatures: Tenor and Giphy hosts.
pub const DEFAULT_GIF_PROVIDERS: [&str; 2] = ["tenor.com", "giphy.com"];

/// Detects embeds whose sole purpose is displaying a provider-hosted GIF.
#[derive(Debug, Clone)]
pub struct GifDetector {
    fragments: Vec<String>,
}

impl Default for GifDetector {
    fn default() -> Self {
        Self::new(DEFAULT_GIF_PROVIDERS.iter().map(|s| s.to_string()).collect())
    }
}

impl GifDetector {
    /// Create a detector over the given provider fragments.
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// True when the URL carries any provider signature.
    pub fn matches(&self, url: &str) -> bool {
        self.fragments.iter().any(|fragment| url.contains(fragment))
    }

    /// True when the embed points at a GIF provider through its source,
    /// image, or thumbnail URL.
    pub fn is_gif_embed(&self, embed: &Embed) -> bool {
        let source = embed.url().as_deref().is_some_and(|url| self.matches(url));
        let image = embed
            .image()
            .as_ref()
            .is_some_and(|media| self.matches(media.url()));
        let thumbnail = embed
            .thumbnail()
            .as_ref()
            .is_some_and(|media| self.matches(media.url()));
        source || image || thumbnail
    }

    /// The one URL a GIF embed contributes: the image, falling back to the
    /// thumbnail.
    pub fn extract_url(&self, embed: &Embed) -> Option<String> {
        embed
            .image()
            .as_ref()
            .or(embed.thumbnail().as_ref())
            .map(|media| media.url().clone())
    }

    /// True when trimmed message content is exactly one provider viewer
    /// URL, in which case the content duplicates the GIF and is suppressed.
    pub fn is_viewer_link(&self, trimmed: &str) -> bool {
        !trimmed.is_empty()
            && !trimmed.contains(char::is_whitespace)
            && (trimmed.starts_with("https://") || trimmed.starts_with("http://"))
            && self.matches(trimmed)
    }
}
