//! Message event-kind tag.

use serde::{Deserialize, Serialize};

/// The event kind of a message.
///
/// Most traffic is `Regular` or `Reply`. The remaining variants narrate
/// platform events (joins, pins, boosts, stage changes) and drive the
/// system-message text generator. Tags this library does not recognize are
/// preserved as `Unknown` so newer event kinds degrade rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MessageKind {
    /// Ordinary authored message.
    Regular,
    /// A user was added to a group or thread.
    RecipientAdd,
    /// A user was removed from a group or thread.
    RecipientRemove,
    /// A call was started.
    Call,
    /// The channel name changed.
    ChannelNameChange,
    /// The channel icon changed.
    ChannelIconChange,
    /// A message was pinned.
    ChannelPinnedMessage,
    /// A member joined the guild.
    MemberJoin,
    /// A member boosted the guild.
    GuildBoost,
    /// A boost pushed the guild to level 1.
    GuildBoostTier1,
    /// A boost pushed the guild to level 2.
    GuildBoostTier2,
    /// A boost pushed the guild to level 3.
    GuildBoostTier3,
    /// An announcement channel was followed into this channel.
    ChannelFollowAdd,
    /// The guild was removed from server discovery.
    GuildDiscoveryDisqualified,
    /// The guild requalified for server discovery.
    GuildDiscoveryRequalified,
    /// First grace-period warning for discovery requirements.
    GuildDiscoveryGracePeriodInitialWarning,
    /// Final grace-period warning for discovery requirements.
    GuildDiscoveryGracePeriodFinalWarning,
    /// A thread was created from this channel.
    ThreadCreated,
    /// Reply to another message.
    Reply,
    /// Slash-command invocation.
    ChatInputCommand,
    /// First message echoed into a newly created thread.
    ThreadStarterMessage,
    /// Invite reminder nudge.
    GuildInviteReminder,
    /// Context-menu command invocation.
    ContextMenuCommand,
    /// AutoMod blocked or flagged content.
    AutoModAction,
    /// A role subscription was purchased.
    RoleSubscriptionPurchase,
    /// Premium upsell interaction.
    InteractionPremiumUpsell,
    /// A stage instance started.
    StageStart,
    /// A stage instance ended.
    StageEnd,
    /// A stage participant became a speaker.
    StageSpeaker,
    /// The stage topic changed.
    StageTopic,
    /// An application was upgraded to premium.
    GuildApplicationPremiumSubscription,
    /// Event kind this library does not recognize.
    Unknown(u8),
}

impl Default for MessageKind {
    fn default() -> Self {
        Self::Regular
    }
}

impl From<u8> for MessageKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Regular,
            1 => Self::RecipientAdd,
            2 => Self::RecipientRemove,
            3 => Self::Call,
            4 => Self::ChannelNameChange,
            5 => Self::ChannelIconChange,
            6 => Self::ChannelPinnedMessage,
            7 => Self::MemberJoin,
            8 => Self::GuildBoost,
            9 => Self::GuildBoostTier1,
            10 => Self::GuildBoostTier2,
            11 => Self::GuildBoostTier3,
            12 => Self::ChannelFollowAdd,
            14 => Self::GuildDiscoveryDisqualified,
            15 => Self::GuildDiscoveryRequalified,
            16 => Self::GuildDiscoveryGracePeriodInitialWarning,
            17 => Self::GuildDiscoveryGracePeriodFinalWarning,
            18 => Self::ThreadCreated,
            19 => Self::Reply,
            20 => Self::ChatInputCommand,
            21 => Self::ThreadStarterMessage,
            22 => Self::GuildInviteReminder,
            23 => Self::ContextMenuCommand,
            24 => Self::AutoModAction,
            25 => Self::RoleSubscriptionPurchase,
            26 => Self::InteractionPremiumUpsell,
            27 => Self::StageStart,
            28 => Self::StageEnd,
            29 => Self::StageSpeaker,
            31 => Self::StageTopic,
            32 => Self::GuildApplicationPremiumSubscription,
            other => Self::Unknown(other),
        }
    }
}

impl From<MessageKind> for u8 {
    fn from(value: MessageKind) -> Self {
        match value {
            MessageKind::Regular => 0,
            MessageKind::RecipientAdd => 1,
            MessageKind::RecipientRemove => 2,
            MessageKind::Call => 3,
            MessageKind::ChannelNameChange => 4,
            MessageKind::ChannelIconChange => 5,
            MessageKind::ChannelPinnedMessage => 6,
            MessageKind::MemberJoin => 7,
            MessageKind::GuildBoost => 8,
            MessageKind::GuildBoostTier1 => 9,
            MessageKind::GuildBoostTier2 => 10,
            MessageKind::GuildBoostTier3 => 11,
            MessageKind::ChannelFollowAdd => 12,
            MessageKind::GuildDiscoveryDisqualified => 14,
            MessageKind::GuildDiscoveryRequalified => 15,
            MessageKind::GuildDiscoveryGracePeriodInitialWarning => 16,
            MessageKind::GuildDiscoveryGracePeriodFinalWarning => 17,
            MessageKind::ThreadCreated => 18,
            MessageKind::Reply => 19,
            MessageKind::ChatInputCommand => 20,
            MessageKind::ThreadStarterMessage => 21,
            MessageKind::GuildInviteReminder => 22,
            MessageKind::ContextMenuCommand => 23,
            MessageKind::AutoModAction => 24,
            MessageKind::RoleSubscriptionPurchase => 25,
            MessageKind::InteractionPremiumUpsell => 26,
            MessageKind::StageStart => 27,
            MessageKind::StageEnd => 28,
            MessageKind::StageSpeaker => 29,
            MessageKind::StageTopic => 31,
            MessageKind::GuildApplicationPremiumSubscription => 32,
            MessageKind::Unknown(other) => other,
        }
    }
}

impl MessageKind {
    /// True for kinds that represent ordinary conversational content:
    /// authored messages, replies, command invocations, and thread-starter
    /// echoes.
    pub fn is_conversational(self) -> bool {
        matches!(
            self,
            Self::Regular
                | Self::Reply
                | Self::ChatInputCommand
                | Self::ThreadStarterMessage
                | Self::ContextMenuCommand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_known_tags() {
        for tag in [0u8, 6, 7, 19, 20, 23, 31, 32] {
            let kind = MessageKind::from(tag);
            assert_eq!(u8::from(kind), tag);
        }
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let kind = MessageKind::from(13);
        assert_eq!(kind, MessageKind::Unknown(13));
        assert_eq!(u8::from(kind), 13);
    }

    #[test]
    fn test_deserialize_from_integer() {
        let kind: MessageKind = serde_json::from_str("7").unwrap();
        assert_eq!(kind, MessageKind::MemberJoin);
    }

    #[test]
    fn test_conversational_kinds() {
        assert!(MessageKind::Regular.is_conversational());
        assert!(MessageKind::Reply.is_conversational());
        assert!(MessageKind::ChatInputCommand.is_conversational());
        assert!(!MessageKind::MemberJoin.is_conversational());
        assert!(!MessageKind::ChannelPinnedMessage.is_conversational());
    }
}
