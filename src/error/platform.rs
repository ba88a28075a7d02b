use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use thiserror::Error;

/// Failure of a single Discord API call.
///
/// Each variant names the operation and carries the ids involved so a report is
/// actionable on its own. The Serenity source error is boxed as it is very large.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to fetch roles for guild {guild_id}: {source}")]
    GuildRoles {
        guild_id: GuildId,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to add role {role_id} to user {user_id} in guild {guild_id}: {source}")]
    GrantRole {
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to remove role {role_id} from user {user_id} in guild {guild_id}: {source}")]
    RevokeRole {
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to add reaction {emoji} to message {message_id} in channel {channel_id}: {source}")]
    AddReaction {
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: String,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to create DM channel for user {user_id}: {source}")]
    CreateDirectChannel {
        user_id: UserId,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to send message to channel {channel_id}: {source}")]
    SendMessage {
        channel_id: ChannelId,
        #[source]
        source: Box<serenity::Error>,
    },

    #[error("Failed to resolve the bot's own user: {source}")]
    CurrentUser {
        #[source]
        source: Box<serenity::Error>,
    },
}
