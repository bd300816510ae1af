//! Snowflake identifier newtypes.
//!
//! Discord transmits snowflake ids as decimal strings in JSON. These
//! newtypes accept either the string form or a bare integer on
//! deserialization and always serialize back to the string form.

use std::fmt;

struct SnowflakeVisitor;

impl serde::de::Visitor<'_> for SnowflakeVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a snowflake id as a decimal string or integer")
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("negative snowflake id: {}", value)))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<u64, E> {
        value
            .parse()
            .map_err(|_| E::custom(format!("invalid snowflake id: {:?}", value)))
    }
}

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw snowflake value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The raw snowflake value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                deserializer.deserialize_any(SnowflakeVisitor).map(Self)
            }
        }
    };
}

snowflake_id!(
    /// Identifier of a message.
    MessageId
);
snowflake_id!(
    /// Identifier of a user.
    UserId
);
snowflake_id!(
    /// Identifier of a role.
    RoleId
);
snowflake_id!(
    /// Identifier of a channel.
    ChannelId
);
snowflake_id!(
    /// Identifier of a guild.
    GuildId
);
snowflake_id!(
    /// Identifier of an attachment.
    AttachmentId
);
snowflake_id!(
    /// Identifier of a sticker.
    StickerId
);
snowflake_id!(
    /// Identifier of a custom emoji.
    EmojiId
);
