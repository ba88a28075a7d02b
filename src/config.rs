//! Process configuration.
//!
//! Credentials come from the environment (optionally via a `.env` file) while the reaction
//! role setup is read from a JSON file whose path can be overridden with
//! `REACTION_ROLES_CONFIG`. Both are loaded once at startup and never reloaded.

use serde::Deserialize;
use serenity::all::{ChannelId, GuildId, MessageId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{config::ConfigError, AppError};
use crate::model::reaction_map::ReactionMap;

const DEFAULT_REACTION_ROLES_CONFIG: &str = "config.json";

pub struct Config {
    pub discord_bot_token: String,
    pub reaction_roles: ReactionRoleConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("DISCORD_BOT_TOKEN").ok(),
            std::env::var("REACTION_ROLES_CONFIG").ok(),
        )
    }

    /// Builds the configuration from raw environment values.
    ///
    /// # Arguments
    /// - `discord_bot_token` - Value of `DISCORD_BOT_TOKEN`, blank counts as missing
    /// - `reaction_roles_config` - Value of `REACTION_ROLES_CONFIG`, defaults to `config.json`
    fn from_vars(
        discord_bot_token: Option<String>,
        reaction_roles_config: Option<String>,
    ) -> Result<Self, AppError> {
        let discord_bot_token = discord_bot_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        Ok(Self {
            discord_bot_token,
            reaction_roles: ReactionRoleConfig::from_file(&reaction_roles_path(
                reaction_roles_config,
            ))?,
        })
    }
}

fn reaction_roles_path(value: Option<String>) -> PathBuf {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REACTION_ROLES_CONFIG))
}

/// The designated message and the roles its reactions control.
///
/// Immutable after startup and shared read-only by every component.
#[derive(Debug, Clone)]
pub struct ReactionRoleConfig {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub reactions: ReactionMap,
}

impl ReactionRoleConfig {
    /// Reads and validates the reaction role file.
    ///
    /// # Returns
    /// - `Ok(ReactionRoleConfig)` - File parsed and every field validated
    /// - `Err(ConfigError::ReadFile)` - File missing or unreadable
    /// - `Err(ConfigError::Parse)` - File is not valid JSON of the expected shape
    /// - `Err(ConfigError)` - Any id or emoji failed validation
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawReactionRoleConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        raw.validate()
    }
}

/// Reaction role file as written on disk.
///
/// ```json
/// {
///   "guildID": "123456789012345678",
///   "channelID": "123456789012345678",
///   "messageID": "123456789012345678",
///   "reactions": { "🟢": "123456789012345678" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct RawReactionRoleConfig {
    #[serde(rename = "guildID")]
    guild_id: String,
    #[serde(rename = "channelID")]
    channel_id: String,
    #[serde(rename = "messageID")]
    message_id: String,
    reactions: HashMap<String, String>,
}

impl RawReactionRoleConfig {
    pub(crate) fn validate(self) -> Result<ReactionRoleConfig, ConfigError> {
        Ok(ReactionRoleConfig {
            guild_id: GuildId::new(parse_snowflake("guild ID", &self.guild_id)?),
            channel_id: ChannelId::new(parse_snowflake("channel ID", &self.channel_id)?),
            message_id: MessageId::new(parse_snowflake("message ID", &self.message_id)?),
            reactions: ReactionMap::parse(self.reactions)?,
        })
    }
}

/// Parses a Discord snowflake, rejecting zero since Serenity ids must be non-zero.
pub(crate) fn parse_snowflake(field: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::RoleId;
    use std::io::Write;

    fn raw_config(value: serde_json::Value) -> Result<ReactionRoleConfig, ConfigError> {
        serde_json::from_value::<RawReactionRoleConfig>(value)
            .unwrap()
            .validate()
    }

    fn write_config() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"guildID":"10","channelID":"20","messageID":"30","reactions":{{"🟢":"101"}}}}"#
        )
        .unwrap();
        file
    }

    fn path_of(file: &tempfile::NamedTempFile) -> Option<String> {
        Some(file.path().to_string_lossy().into_owned())
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let file = write_config();

        let result = Config::from_vars(None, path_of(&file));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let file = write_config();

        let result = Config::from_vars(Some("  \t".to_string()), path_of(&file));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn loads_token_and_reaction_roles() {
        let file = write_config();

        let config = Config::from_vars(Some("token".to_string()), path_of(&file))
            .unwrap_or_else(|e| panic!("{}", e));

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.reaction_roles.message_id, MessageId::new(30));
    }

    #[test]
    fn reaction_roles_path_defaults_to_config_json() {
        assert_eq!(reaction_roles_path(None), PathBuf::from("config.json"));
        assert_eq!(reaction_roles_path(Some(String::new())), PathBuf::from("config.json"));
        assert_eq!(
            reaction_roles_path(Some("/etc/roles.json".to_string())),
            PathBuf::from("/etc/roles.json")
        );
    }

    #[test]
    fn validates_complete_config() {
        let config = raw_config(serde_json::json!({
            "guildID": "10",
            "channelID": "20",
            "messageID": "30",
            "reactions": { "🟢": "101", "🔴": "102" }
        }))
        .unwrap();

        assert_eq!(config.guild_id, GuildId::new(10));
        assert_eq!(config.channel_id, ChannelId::new(20));
        assert_eq!(config.message_id, MessageId::new(30));
        assert_eq!(
            config.reactions.role_for(&serenity::all::ReactionType::Unicode("🔴".to_string())).unwrap().role_id,
            RoleId::new(102)
        );
    }

    #[test]
    fn rejects_zero_message_id() {
        let result = raw_config(serde_json::json!({
            "guildID": "10",
            "channelID": "20",
            "messageID": "0",
            "reactions": { "🟢": "101" }
        }));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidId {
                field: "message ID",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_numeric_guild_id() {
        let result = raw_config(serde_json::json!({
            "guildID": "my-guild",
            "channelID": "20",
            "messageID": "30",
            "reactions": { "🟢": "101" }
        }));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidId {
                field: "guild ID",
                ..
            })
        ));
    }

    #[test]
    fn loads_config_from_file() {
        let file = write_config();

        let config = ReactionRoleConfig::from_file(file.path()).unwrap();

        assert_eq!(config.reactions.len(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = ReactionRoleConfig::from_file(&dir.path().join("config.json"));

        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"guildID":"10"}}"#).unwrap();

        let result = ReactionRoleConfig::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
