//! Sticker model.

use crate::StickerId;
use serde::{Deserialize, Serialize};

/// Image format of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum StickerFormat {
    /// Static PNG image.
    Png,
    /// Animated PNG image.
    Apng,
    /// Lottie vector animation.
    Lottie,
    /// Animated GIF image.
    Gif,
    /// Format tag this library does not recognize.
    Unknown(u8),
}

impl From<u8> for StickerFormat {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Png,
            2 => Self::Apng,
            3 => Self::Lottie,
            4 => Self::Gif,
            other => Self::Unknown(other),
        }
    }
}

impl From<StickerFormat> for u8 {
    fn from(value: StickerFormat) -> Self {
        match value {
            StickerFormat::Png => 1,
            StickerFormat::Apng => 2,
            StickerFormat::Lottie => 3,
            StickerFormat::Gif => 4,
            StickerFormat::Unknown(other) => other,
        }
    }
}

impl StickerFormat {
    /// True for formats that animate when displayed.
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Apng | Self::Lottie | Self::Gif)
    }
}

/// A sticker sent with a message.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Sticker {
    /// Sticker snowflake ID (required)
    id: StickerId,
    /// Sticker name (required)
    name: String,
    /// Image format tag (required)
    format_type: StickerFormat,
}
