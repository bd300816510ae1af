//! The page-fetch capability.

use async_trait::async_trait;
use scribe_core::{Message, MessageId};
use scribe_error::ScribeResult;

/// Capability for fetching pages of channel history.
///
/// Pages are returned newest-first, at most `limit` messages per call, all
/// strictly older than `before` when a cursor is given. An empty page
/// means the start of history has been reached. Implementations do not
/// retry: a failed fetch surfaces as an error and aborts the transcript.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetch up to `limit` messages older than `before`, newest first.
    async fn fetch_page(
        &self,
        before: Option<MessageId>,
        limit: u8,
    ) -> ScribeResult<Vec<Message>>;
}
