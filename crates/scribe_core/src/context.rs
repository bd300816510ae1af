//! Reference-resolution lookup tables.
//!
//! The formatter resolves user/role/channel reference tokens against these
//! tables. The context is an explicit read-only value threaded through the
//! pipeline, never ambient state, so formatting stays a pure function of
//! its inputs.

use crate::{ChannelId, Message, RoleId, UserId};
use std::collections::HashMap;

/// Display data for a role.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RoleInfo {
    /// Role name without the @.
    name: String,
    /// Role color as a decimal RGB integer. Zero means no color.
    color: u32,
}

impl RoleInfo {
    /// Create role display data.
    pub fn new(name: impl Into<String>, color: u32) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Lookup tables for reference resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolverContext {
    users: HashMap<u64, String>,
    roles: HashMap<u64, RoleInfo>,
    channels: HashMap<u64, String>,
}

impl ResolverContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user's display name.
    pub fn insert_user(&mut self, id: UserId, name: impl Into<String>) {
        self.users.insert(id.get(), name.into());
    }

    /// Register a role.
    pub fn insert_role(&mut self, id: RoleId, role: RoleInfo) {
        self.roles.insert(id.get(), role);
    }

    /// Register a channel name.
    pub fn insert_channel(&mut self, id: ChannelId, name: impl Into<String>) {
        self.channels.insert(id.get(), name.into());
    }

    /// Look up a user's display name by raw id.
    pub fn user(&self, id: u64) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    /// Look up a role by raw id.
    pub fn role(&self, id: u64) -> Option<&RoleInfo> {
        self.roles.get(&id)
    }

    /// Look up a channel name by raw id.
    pub fn channel(&self, id: u64) -> Option<&str> {
        self.channels.get(&id).map(String::as_str)
    }

    /// Seed user entries from the mention arrays of fetched messages.
    ///
    /// The history payload carries a resolved user object for every user
    /// mentioned in a message, which covers the ids the content can
    /// reference without any extra lookups. Existing entries win so a
    /// caller-curated table is never overwritten.
    pub fn absorb_mentions<'a>(&mut self, messages: impl IntoIterator<Item = &'a Message>) {
        for message in messages {
            for user in message.mentions() {
                self.users
                    .entry(user.id().get())
                    .or_insert_with(|| user.display_name().to_string());
            }
        }
    }
}
