//! `MessageSource` adapter over the REST client.

use crate::DiscordRestClient;
use async_trait::async_trait;
use scribe_core::{ChannelId, Message, MessageId};
use scribe_error::ScribeResult;
use scribe_transcript::MessageSource;

/// One channel's history, viewed as a page-fetch capability.
#[derive(Debug, Clone)]
pub struct ChannelMessages<'a> {
    client: &'a DiscordRestClient,
    channel_id: ChannelId,
}

impl<'a> ChannelMessages<'a> {
    /// Bind a client to a channel.
    pub fn new(client: &'a DiscordRestClient, channel_id: ChannelId) -> Self {
        Self { client, channel_id }
    }
}

#[async_trait]
impl MessageSource for ChannelMessages<'_> {
    async fn fetch_page(
        &self,
        before: Option<MessageId>,
        limit: u8,
    ) -> ScribeResult<Vec<Message>> {
        self.client
            .get_messages(self.channel_id, before, limit)
            .await
    }
}
