use serenity::all::{
    ChannelId, EmojiId, GuildId, MessageId, Reaction, ReactionType, RoleId, UserId,
};

/// A reaction added to or removed from a guild message.
///
/// Built from Serenity's gateway `Reaction` and consumed once by the reaction role
/// service. Only guild reactions with a known acting user can be represented; anything
/// else is dropped during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub emoji: ReactionType,
}

impl ReactionEvent {
    /// Converts a gateway reaction into an event.
    ///
    /// # Returns
    /// - `Some(ReactionEvent)` - Reaction happened in a guild and names the acting user
    /// - `None` - Direct message reaction or reaction without a user id
    pub fn from_reaction(reaction: &Reaction) -> Option<Self> {
        Some(Self {
            message_id: reaction.message_id,
            channel_id: reaction.channel_id,
            guild_id: reaction.guild_id?,
            user_id: reaction.user_id?,
            emoji: reaction.emoji.clone(),
        })
    }
}

/// Identity of an emoji when matching reactions against the reaction map.
///
/// Unicode emoji are identified by the emoji itself. Custom emoji are identified by
/// their id only, names are not unique across guilds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmojiKey {
    Unicode(String),
    Custom(EmojiId),
}

impl EmojiKey {
    /// Returns the key for an emoji, or `None` for emoji kinds the bot doesn't manage.
    pub fn of(emoji: &ReactionType) -> Option<Self> {
        match emoji {
            ReactionType::Unicode(symbol) if !symbol.is_empty() => {
                Some(Self::Unicode(symbol.clone()))
            }
            ReactionType::Custom { id, .. } => Some(Self::Custom(*id)),
            _ => None,
        }
    }
}

/// Returns the text used to mention an emoji in notifications.
///
/// Unicode emoji are shown as-is, custom emoji by their name.
pub fn emoji_label(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(symbol) => symbol.clone(),
        ReactionType::Custom { id, name, .. } => {
            name.clone().unwrap_or_else(|| id.to_string())
        }
        other => other.to_string(),
    }
}

/// Whether a role mutation adds or removes the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationDirection {
    Grant,
    Revoke,
}

impl MutationDirection {
    /// Builds the direct message sent to a user once the mutation succeeded.
    ///
    /// # Arguments
    /// - `role_name` - Display name of the role, or its raw id when the name is unknown
    /// - `emoji` - Label of the emoji the user reacted with
    pub fn notification(self, role_name: &str, emoji: &str) -> String {
        match self {
            Self::Grant => format!("✅ You were given the role: **{}** ({})", role_name, emoji),
            Self::Revoke => format!(
                "❌ The role **{}** ({}) was removed from you",
                role_name, emoji
            ),
        }
    }
}

/// A single grant or revoke request sent to Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMutation {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub direction: MutationDirection,
}
