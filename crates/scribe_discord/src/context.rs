//! Resolver-table population from guild metadata.

use crate::{ChannelData, DiscordRestClient};
use scribe_core::{ResolverContext, RoleInfo};
use scribe_error::ScribeResult;
use tracing::{debug, instrument};

/// Build the resolver tables for a channel's guild.
///
/// Roles and channels come from two guild lookups; user entries are left
/// to the pipeline, which absorbs them from the mention arrays of the
/// retrieved history. A channel without a guild yields empty tables, and
/// every unresolved reference degrades to its fallback label downstream.
#[instrument(skip(client, channel), fields(channel_id = %channel.id()))]
pub async fn build_context(
    client: &DiscordRestClient,
    channel: &ChannelData,
) -> ScribeResult<ResolverContext> {
    let mut context = ResolverContext::new();
    let Some(guild_id) = *channel.guild_id() else {
        debug!("Channel has no guild, leaving resolver tables empty");
        return Ok(context);
    };

    let roles = client.get_guild_roles(guild_id).await?;
    debug!(role_count = roles.len(), "Registering guild roles");
    for role in roles {
        context.insert_role(*role.id(), RoleInfo::new(role.name().clone(), *role.color()));
    }

    let channels = client.get_guild_channels(guild_id).await?;
    debug!(channel_count = channels.len(), "Registering guild channels");
    for entry in channels {
        if let Some(name) = entry.name() {
            context.insert_channel(*entry.id(), name.clone());
        }
    }

    Ok(context)
}
