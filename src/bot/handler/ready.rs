//! Ready event handler.
//!
//! Fired after each successful gateway handshake, including reconnects. Startup work
//! such as role caching and reaction reconciliation has already run before the gateway
//! connects, so this only logs the connection.

use serenity::all::{Context, Ready};

use crate::platform::DiscordPlatform;
use crate::service::ReactionRoleService;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `service` - Reaction role service, used to log the managed message
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready<P>(service: &ReactionRoleService<P>, _ctx: Context, ready: Ready)
where
    P: DiscordPlatform + ?Sized,
{
    let config = service.config();

    tracing::info!(
        "{} is connected to Discord, managing {} reaction roles on message {} in channel {}",
        ready.user.name,
        config.reactions.len(),
        config.message_id,
        config.channel_id
    );
}
