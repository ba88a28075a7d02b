//! Validated emoji to role mapping.
//!
//! The reaction map is parsed once from the raw configuration and never changes for the
//! lifetime of the process. Keys are either unicode emoji or custom guild emoji in mention
//! form (`<:name:id>` / `<a:name:id>`). Inbound reactions are matched by [`EmojiKey`], so a
//! custom emoji only matches when its id is the configured one.

use serenity::all::{ReactionType, RoleId};
use std::collections::HashMap;

use crate::error::config::ConfigError;
use crate::model::reaction::EmojiKey;

/// A single configured emoji and the role it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRole {
    /// Emoji key exactly as written in the configuration.
    pub symbol: String,
    /// Parsed emoji used when adding the reaction to the target message.
    pub emoji: ReactionType,
    pub role_id: RoleId,
}

#[derive(Debug, Clone, Default)]
pub struct ReactionMap {
    by_key: HashMap<EmojiKey, ReactionRole>,
}

impl ReactionMap {
    /// Parses the raw emoji to role id mapping.
    ///
    /// # Returns
    /// - `Ok(ReactionMap)` - Every key is a usable emoji and every value a valid role id
    /// - `Err(ConfigError::EmptyReactionMap)` - No entries
    /// - `Err(ConfigError::InvalidEmoji)` - Key is empty, malformed, or names the same
    ///   custom emoji as another key
    /// - `Err(ConfigError::InvalidId)` - Value is not a valid role id
    pub fn parse(raw: HashMap<String, String>) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::EmptyReactionMap);
        }

        let mut by_key = HashMap::with_capacity(raw.len());

        for (symbol, role_id) in raw {
            let emoji = ReactionType::try_from(symbol.as_str())
                .map_err(|_| ConfigError::InvalidEmoji(symbol.clone()))?;
            let role_id = RoleId::new(crate::config::parse_snowflake("role ID", &role_id)?);

            let Some(key) = EmojiKey::of(&emoji) else {
                return Err(ConfigError::InvalidEmoji(symbol));
            };

            // `<:a:1>` and `<:b:1>` are the same emoji
            if by_key.contains_key(&key) {
                return Err(ConfigError::InvalidEmoji(symbol));
            }

            by_key.insert(
                key,
                ReactionRole {
                    symbol,
                    emoji,
                    role_id,
                },
            );
        }

        Ok(Self { by_key })
    }

    /// Looks up the role controlled by an emoji.
    pub fn role_for(&self, emoji: &ReactionType) -> Option<&ReactionRole> {
        self.by_key.get(&EmojiKey::of(emoji)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReactionRole> {
        self.by_key.values()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }
}
