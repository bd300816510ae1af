//! Cursor-pagination history retrieval.

use crate::MessageSource;
use scribe_core::{Message, MessageId};
use scribe_error::ScribeResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Per-request page ceiling of the underlying retrieval capability.
pub const PAGE_SIZE: u8 = 100;

/// How much history to retrieve.
///
/// On the wire this is the original integer option: any negative value
/// means the entire history, everything else is a message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MessageLimit {
    /// Retrieve the entire channel history.
    All,
    /// Retrieve at most this many of the newest messages.
    Count(usize),
}

impl Default for MessageLimit {
    fn default() -> Self {
        Self::Count(100)
    }
}

impl From<i64> for MessageLimit {
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::All
        } else {
            Self::Count(value as usize)
        }
    }
}

impl From<MessageLimit> for i64 {
    fn from(value: MessageLimit) -> Self {
        match value {
            MessageLimit::All => -1,
            MessageLimit::Count(count) => count as i64,
        }
    }
}

/// Retrieve channel history in chronological (oldest-first) order.
///
/// Walks backwards from the newest message: each page is requested with
/// the oldest-seen id as the `before` cursor and arrives newest-first, so
/// the accumulator stays newest-first overall and one final reverse yields
/// chronological order. Every request asks for the full page ceiling; with
/// a finite limit the accumulator is truncated once it reaches the target,
/// keeping exactly the newest `N` messages available.
///
/// A zero limit returns empty without fetching. A channel with fewer
/// messages than the limit yields everything available. Fetch failures
/// abort and propagate; there is no partial result.
#[instrument(skip(source), fields(limit = ?limit, collected))]
pub async fn collect_history(
    source: &dyn MessageSource,
    limit: MessageLimit,
) -> ScribeResult<Vec<Message>> {
    let target = match limit {
        MessageLimit::Count(0) => {
            debug!("zero-message request, skipping retrieval");
            return Ok(Vec::new());
        }
        MessageLimit::Count(count) => Some(count),
        MessageLimit::All => None,
    };

    let mut collected: Vec<Message> = Vec::new();
    let mut cursor: Option<MessageId> = None;
    loop {
        let page = source.fetch_page(cursor, PAGE_SIZE).await?;
        if page.is_empty() {
            debug!("reached start of history");
            break;
        }
        cursor = page.last().map(|message| *message.id());
        collected.extend(page);

        if let Some(target) = target {
            if collected.len() >= target {
                collected.truncate(target);
                break;
            }
        }
    }

    collected.reverse();
    tracing::Span::current().record("collected", collected.len());
    Ok(collected)
}
