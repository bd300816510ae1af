//! Channel validation error types.
//!
//! Raised before any history retrieval when the target channel cannot be
//! turned into a transcript at all.

use derive_getters::Getters;

/// Channel error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ChannelErrorKind {
    /// The channel is a direct-message-style channel, which has no guild
    /// context and is not supported.
    #[display("Unsupported channel type {_0}: direct message channels cannot be archived")]
    UnsupportedChannelType(u8),

    /// Channel not found by ID.
    #[display("Channel not found: {_0}")]
    ChannelNotFound(u64),

    /// The channel payload is missing a field the transcript needs.
    #[display("Incomplete channel payload: {_0}")]
    IncompleteChannel(String),
}

/// Channel error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Channel Error: {} at line {} in {}", kind, line, file)]
pub struct ChannelError {
    kind: ChannelErrorKind,
    line: u32,
    file: &'static str,
}

impl ChannelError {
    /// Create a new ChannelError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use scribe_error::{ChannelError, ChannelErrorKind};
    ///
    /// let err = ChannelError::new(ChannelErrorKind::UnsupportedChannelType(1));
    /// ```
    #[track_caller]
    pub fn new(kind: ChannelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
