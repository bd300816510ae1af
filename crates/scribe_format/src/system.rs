//! System-message text generation.
//!
//! A finite mapping from message event kind to templated narration. Kinds
//! that carry ordinary conversational content map to `None`, as do kinds
//! this library does not recognize.

use crate::escape_html;
use scribe_core::MessageKind;

/// Produce the narration text for a platform event, or `None` when the
/// message is ordinary conversational content.
///
/// `author` is the display name of the message author, `target` the first
/// mentioned user (used by recipient events), and `content` the raw message
/// content (used by rename/follow/stage events). All three are escaped
/// before interpolation; callers pass them raw.
pub fn system_text(
    kind: MessageKind,
    author: &str,
    target: Option<&str>,
    content: Option<&str>,
) -> Option<String> {
    let author = escape_html(author);
    let target = escape_html(target.unwrap_or("Unknown User"));
    let content = escape_html(content.unwrap_or_default());

    let text = match kind {
        MessageKind::RecipientAdd => format!("{author} added {target} to the thread."),
        MessageKind::RecipientRemove => format!("{author} removed {target} from the thread."),
        MessageKind::Call => format!("{author} started a call."),
        MessageKind::ChannelNameChange => {
            format!("{author} changed the channel name: {content}")
        }
        MessageKind::ChannelIconChange => format!("{author} changed the channel icon."),
        MessageKind::ChannelPinnedMessage => {
            format!("{author} pinned a message to this channel.")
        }
        MessageKind::MemberJoin => format!("{author} joined the server."),
        MessageKind::GuildBoost => format!("{author} boosted the server!"),
        MessageKind::GuildBoostTier1 => {
            format!("{author} boosted the server! The server has reached Level 1!")
        }
        MessageKind::GuildBoostTier2 => {
            format!("{author} boosted the server! The server has reached Level 2!")
        }
        MessageKind::GuildBoostTier3 => {
            format!("{author} boosted the server! The server has reached Level 3!")
        }
        MessageKind::ChannelFollowAdd => {
            format!("{author} has added {content} to this channel.")
        }
        MessageKind::GuildDiscoveryDisqualified => format!(
            "{author}: this server has been removed from Server Discovery because it no longer meets the requirements."
        ),
        MessageKind::GuildDiscoveryRequalified => format!(
            "{author}: this server is eligible for Server Discovery again and has been automatically relisted."
        ),
        MessageKind::GuildDiscoveryGracePeriodInitialWarning => format!(
            "{author}: this server has failed Discovery activity requirements for 1 week."
        ),
        MessageKind::GuildDiscoveryGracePeriodFinalWarning => format!(
            "{author}: this server has failed Discovery activity requirements for 3 weeks in a row."
        ),
        MessageKind::ThreadCreated => format!("{author} started a thread: {content}"),
        MessageKind::GuildInviteReminder => format!("{author} sent an invite reminder."),
        MessageKind::AutoModAction => format!("{author} triggered an AutoMod action."),
        MessageKind::RoleSubscriptionPurchase => {
            format!("{author} purchased a role subscription.")
        }
        MessageKind::InteractionPremiumUpsell => format!("{author} received a premium upsell."),
        MessageKind::StageStart => format!("{author} started {content}"),
        MessageKind::StageEnd => format!("{author} ended {content}"),
        MessageKind::StageSpeaker => format!("{author} is now a speaker."),
        MessageKind::StageTopic => format!("{author} changed the stage topic: {content}"),
        MessageKind::GuildApplicationPremiumSubscription => {
            format!("{author} upgraded an application to premium.")
        }
        MessageKind::Regular
        | MessageKind::Reply
        | MessageKind::ChatInputCommand
        | MessageKind::ThreadStarterMessage
        | MessageKind::ContextMenuCommand
        | MessageKind::Unknown(_) => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversational_kinds_are_not_system_messages() {
        for kind in [
            MessageKind::Regular,
            MessageKind::Reply,
            MessageKind::ChatInputCommand,
            MessageKind::ThreadStarterMessage,
            MessageKind::ContextMenuCommand,
        ] {
            assert_eq!(system_text(kind, "ana", None, None), None);
        }
    }

    #[test]
    fn test_unknown_kind_is_not_a_system_message() {
        assert_eq!(system_text(MessageKind::Unknown(99), "ana", None, None), None);
    }

    #[test]
    fn test_every_mapped_kind_names_the_author() {
        let kinds = [
            MessageKind::RecipientAdd,
            MessageKind::RecipientRemove,
            MessageKind::Call,
            MessageKind::ChannelNameChange,
            MessageKind::ChannelIconChange,
            MessageKind::ChannelPinnedMessage,
            MessageKind::MemberJoin,
            MessageKind::GuildBoost,
            MessageKind::GuildBoostTier1,
            MessageKind::GuildBoostTier2,
            MessageKind::GuildBoostTier3,
            MessageKind::ChannelFollowAdd,
            MessageKind::GuildDiscoveryDisqualified,
            MessageKind::GuildDiscoveryRequalified,
            MessageKind::GuildDiscoveryGracePeriodInitialWarning,
            MessageKind::GuildDiscoveryGracePeriodFinalWarning,
            MessageKind::ThreadCreated,
            MessageKind::GuildInviteReminder,
            MessageKind::AutoModAction,
            MessageKind::RoleSubscriptionPurchase,
            MessageKind::InteractionPremiumUpsell,
            MessageKind::StageStart,
            MessageKind::StageEnd,
            MessageKind::StageSpeaker,
            MessageKind::StageTopic,
            MessageKind::GuildApplicationPremiumSubscription,
        ];
        for kind in kinds {
            let text = system_text(kind, "a<b>", None, None).unwrap();
            assert!(
                text.contains("a&lt;b&gt;"),
                "kind {kind:?} must name the escaped author: {text}"
            );
        }
    }

    #[test]
    fn test_pin_template() {
        assert_eq!(
            system_text(MessageKind::ChannelPinnedMessage, "ana", None, None).unwrap(),
            "ana pinned a message to this channel."
        );
    }

    #[test]
    fn test_recipient_add_uses_target() {
        assert_eq!(
            system_text(MessageKind::RecipientAdd, "ana", Some("ben"), None).unwrap(),
            "ana added ben to the thread."
        );
    }

    #[test]
    fn test_missing_target_falls_back() {
        assert_eq!(
            system_text(MessageKind::RecipientRemove, "ana", None, None).unwrap(),
            "ana removed Unknown User from the thread."
        );
    }

    #[test]
    fn test_interpolated_content_is_escaped() {
        let text = system_text(
            MessageKind::ChannelNameChange,
            "ana",
            None,
            Some("<new & name>"),
        )
        .unwrap();
        assert_eq!(text, "ana changed the channel name: &lt;new &amp; name&gt;");
    }
}
