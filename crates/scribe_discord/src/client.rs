//! Discord REST client.

use crate::{ChannelData, RoleData};
use reqwest::Client;
use scribe_core::{ChannelId, GuildId, Message, MessageId};
use scribe_error::{RetrievalError, RetrievalErrorKind, ScribeResult};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Authenticated read-only client for the Discord REST API.
///
/// Performs the handful of GET requests the transcript needs. No retry:
/// retrieval is fail-fast, so the first failure aborts the operation and
/// surfaces to the caller.
#[derive(Debug, Clone)]
pub struct DiscordRestClient {
    client: Client,
    token: String,
    base_url: String,
}

impl DiscordRestClient {
    /// Create a client with a bot token.
    pub fn new(token: impl Into<String>) -> Self {
        debug!("Creating new Discord REST client");
        Self {
            client: Client::new(),
            token: token.into(),
            base_url: DISCORD_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root, for tests and proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ScribeResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, path, "Failed to reach the Discord API");
                RetrievalError::new(RetrievalErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status, body = %body, path, "Discord API returned error");
            return Err(RetrievalError::new(RetrievalErrorKind::Api {
                status,
                message: body,
            })
            .into());
        }

        let decoded = response.json::<T>().await.map_err(|e| {
            error!(error = ?e, path, "Failed to decode Discord API response");
            RetrievalError::new(RetrievalErrorKind::Decode(format!(
                "Failed to decode response: {}",
                e
            )))
        })?;
        Ok(decoded)
    }

    /// Fetch channel metadata.
    #[instrument(skip(self), fields(channel_id = %channel_id))]
    pub async fn get_channel(&self, channel_id: ChannelId) -> ScribeResult<ChannelData> {
        debug!("Fetching channel metadata");
        self.get_json(&format!("/channels/{}", channel_id), &[]).await
    }

    /// Fetch one page of channel history, newest first.
    ///
    /// `limit` is clamped to the API's per-call ceiling of 100. With a
    /// `before` cursor, only messages strictly older than it are returned.
    #[instrument(
        skip(self),
        fields(channel_id = %channel_id, before = ?before, limit)
    )]
    pub async fn get_messages(
        &self,
        channel_id: ChannelId,
        before: Option<MessageId>,
        limit: u8,
    ) -> ScribeResult<Vec<Message>> {
        let mut query = vec![("limit", limit.min(100).to_string())];
        if let Some(before) = before {
            query.push(("before", before.to_string()));
        }
        debug!("Fetching message page");
        self.get_json(&format!("/channels/{}/messages", channel_id), &query)
            .await
    }

    /// Fetch all roles of a guild.
    #[instrument(skip(self), fields(guild_id = %guild_id))]
    pub async fn get_guild_roles(&self, guild_id: GuildId) -> ScribeResult<Vec<RoleData>> {
        debug!("Fetching guild roles");
        self.get_json(&format!("/guilds/{}/roles", guild_id), &[]).await
    }

    /// Fetch all channels of a guild.
    #[instrument(skip(self), fields(guild_id = %guild_id))]
    pub async fn get_guild_channels(&self, guild_id: GuildId) -> ScribeResult<Vec<ChannelData>> {
        debug!("Fetching guild channels");
        self.get_json(&format!("/guilds/{}/channels", guild_id), &[])
            .await
    }
}
