//! Recording `DiscordPlatform` for tests.
//!
//! Every call is appended to a shared log before it is answered, so tests can assert on
//! exactly which requests were issued and in which order. Individual operations, or
//! individual emoji for `add_reaction`, can be scripted to fail.

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, Role, RoleId, UserId};
use serenity::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::DiscordPlatform;
use crate::error::platform::PlatformError;

pub const BOT_USER_ID: u64 = 999;

/// Direct message channel ids are derived from the user id so tests can predict them.
pub fn dm_channel_for(user_id: UserId) -> ChannelId {
    ChannelId::new(user_id.get() + 1_000_000)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CurrentUser,
    GuildRoles,
    GrantRole,
    RevokeRole,
    AddReaction,
    CreateDirectChannel,
    SendMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    CurrentUser,
    GuildRoles(GuildId),
    GrantRole(GuildId, UserId, RoleId),
    RevokeRole(GuildId, UserId, RoleId),
    AddReaction(ChannelId, MessageId, String),
    CreateDirectChannel(UserId),
    SendMessage(ChannelId, String),
}

#[derive(Default)]
pub struct MockPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    failing: Mutex<HashSet<Operation>>,
    failing_emoji: Mutex<HashSet<String>>,
    roles: Mutex<Vec<Role>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the role list returned by `guild_roles`.
    pub fn with_roles(self, roles: Vec<Role>) -> Self {
        *self.roles.lock().unwrap() = roles;
        self
    }

    pub fn set_roles(&self, roles: Vec<Role>) {
        *self.roles.lock().unwrap() = roles;
    }

    pub fn fail(&self, operation: Operation) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn fail_emoji(&self, emoji: &str) {
        self.failing_emoji.lock().unwrap().insert(emoji.to_string());
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    fn record(&self, call: PlatformCall) -> Result<(), PlatformError> {
        let should_fail = match &call {
            PlatformCall::AddReaction(_, _, emoji) => {
                self.failing_emoji.lock().unwrap().contains(emoji)
            }
            _ => false,
        } || self.failing.lock().unwrap().contains(&call.operation());

        let error = should_fail.then(|| rejected(&call));
        self.calls.lock().unwrap().push(call);

        match error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Builds the error Serenity-backed calls would return for a rejected request.
fn rejected(call: &PlatformCall) -> PlatformError {
    let source = Box::new(serenity::Error::Other("rejected by mock platform"));

    match call.clone() {
        PlatformCall::CurrentUser => PlatformError::CurrentUser { source },
        PlatformCall::GuildRoles(guild_id) => PlatformError::GuildRoles { guild_id, source },
        PlatformCall::GrantRole(guild_id, user_id, role_id) => PlatformError::GrantRole {
            guild_id,
            user_id,
            role_id,
            source,
        },
        PlatformCall::RevokeRole(guild_id, user_id, role_id) => PlatformError::RevokeRole {
            guild_id,
            user_id,
            role_id,
            source,
        },
        PlatformCall::AddReaction(channel_id, message_id, emoji) => PlatformError::AddReaction {
            channel_id,
            message_id,
            emoji,
            source,
        },
        PlatformCall::CreateDirectChannel(user_id) => {
            PlatformError::CreateDirectChannel { user_id, source }
        }
        PlatformCall::SendMessage(channel_id, _) => {
            PlatformError::SendMessage { channel_id, source }
        }
    }
}

impl PlatformCall {
    pub fn operation(&self) -> Operation {
        match self {
            Self::CurrentUser => Operation::CurrentUser,
            Self::GuildRoles(..) => Operation::GuildRoles,
            Self::GrantRole(..) => Operation::GrantRole,
            Self::RevokeRole(..) => Operation::RevokeRole,
            Self::AddReaction(..) => Operation::AddReaction,
            Self::CreateDirectChannel(..) => Operation::CreateDirectChannel,
            Self::SendMessage(..) => Operation::SendMessage,
        }
    }
}

#[async_trait]
impl DiscordPlatform for MockPlatform {
    async fn current_user_id(&self) -> Result<UserId, PlatformError> {
        self.record(PlatformCall::CurrentUser)?;
        Ok(UserId::new(BOT_USER_ID))
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, PlatformError> {
        self.record(PlatformCall::GuildRoles(guild_id))?;
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::GrantRole(guild_id, user_id, role_id))
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::RevokeRole(guild_id, user_id, role_id))
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::AddReaction(
            channel_id,
            message_id,
            emoji.to_string(),
        ))
    }

    async fn create_direct_channel(&self, user_id: UserId) -> Result<ChannelId, PlatformError> {
        self.record(PlatformCall::CreateDirectChannel(user_id))?;
        Ok(dm_channel_for(user_id))
    }

    async fn send_message(&self, channel_id: ChannelId, text: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::SendMessage(channel_id, text.to_string()))
    }
}
