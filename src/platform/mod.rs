//! Discord API seam.
//!
//! `DiscordPlatform` lists every REST call the bot makes. Production code talks to Discord
//! through `SerenityPlatform`, tests substitute a recording fake. Request timeouts and
//! rate limit handling are owned by Serenity's HTTP client, a timed out request surfaces
//! as an ordinary `PlatformError`.

#[cfg(test)]
pub mod mock;

use serenity::all::{
    ChannelId, CreateMessage, GuildId, MessageId, ReactionType, Role, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::platform::PlatformError;

/// Audit log reason attached to every role change the bot makes.
const AUDIT_LOG_REASON: &str = "Reaction role";

#[async_trait]
pub trait DiscordPlatform: Send + Sync {
    /// Resolves the user the bot is logged in as.
    async fn current_user_id(&self) -> Result<UserId, PlatformError>;

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, PlatformError>;

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError>;

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError>;

    /// Adds a reaction as the bot. Adding an existing reaction is a no-op on Discord's side.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), PlatformError>;

    /// Opens, or reuses, the direct message channel with a user.
    async fn create_direct_channel(&self, user_id: UserId) -> Result<ChannelId, PlatformError>;

    async fn send_message(&self, channel_id: ChannelId, text: &str) -> Result<(), PlatformError>;
}

/// `DiscordPlatform` backed by Serenity's REST client.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordPlatform for SerenityPlatform {
    async fn current_user_id(&self) -> Result<UserId, PlatformError> {
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(|e| PlatformError::CurrentUser {
                source: Box::new(e),
            })?;

        Ok(user.id)
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, PlatformError> {
        self.http
            .get_guild_roles(guild_id)
            .await
            .map_err(|e| PlatformError::GuildRoles {
                guild_id,
                source: Box::new(e),
            })
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await
            .map_err(|e| PlatformError::GrantRole {
                guild_id,
                user_id,
                role_id,
                source: Box::new(e),
            })
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await
            .map_err(|e| PlatformError::RevokeRole {
                guild_id,
                user_id,
                role_id,
                source: Box::new(e),
            })
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), PlatformError> {
        self.http
            .create_reaction(channel_id, message_id, emoji)
            .await
            .map_err(|e| PlatformError::AddReaction {
                channel_id,
                message_id,
                emoji: emoji.to_string(),
                source: Box::new(e),
            })
    }

    async fn create_direct_channel(&self, user_id: UserId) -> Result<ChannelId, PlatformError> {
        let channel = user_id
            .create_dm_channel(&self.http)
            .await
            .map_err(|e| PlatformError::CreateDirectChannel {
                user_id,
                source: Box::new(e),
            })?;

        Ok(channel.id)
    }

    async fn send_message(&self, channel_id: ChannelId, text: &str) -> Result<(), PlatformError> {
        let message = CreateMessage::new().content(text);

        channel_id
            .send_message(&self.http, message)
            .await
            .map_err(|e| PlatformError::SendMessage {
                channel_id,
                source: Box::new(e),
            })?;

        Ok(())
    }
}
