//! Discord gateway integration.
//!
//! The bot connects to Discord's gateway and forwards reaction events on the managed
//! message to the `ReactionRoleService`. Serenity dispatches every event on its own task,
//! so reactions from different users are processed concurrently.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, required for guild scoped events
//! - `GUILD_MESSAGE_REACTIONS` - Receive reaction add and remove events in guilds
//!
//! Neither is privileged. The bot's role needs the Manage Roles permission and must sit
//! above every role in the reaction map.

pub mod handler;
pub mod start;
