use std::sync::Arc;

use crate::config::ReactionRoleConfig;
use crate::error::AppError;
use crate::platform::DiscordPlatform;
use crate::service::{ErrorReporter, ReactionReconciler, ReactionRoleService, RoleNameCache};

/// Prepares the reaction role service before any gateway event is handled.
///
/// Resolves the bot's own user, caches the configured guild's role names and re-adds the
/// configured reactions to the managed message. Only resolving the bot user is fatal: it
/// fails when the token is invalid. Role caching and reaction failures are reported and
/// startup continues, notifications then fall back to raw role ids.
///
/// # Arguments
/// - `platform` - Discord API shared with the returned service
/// - `config` - Validated reaction role configuration
/// - `reporter` - Sink for non-fatal platform errors
///
/// # Returns
/// - `Ok(ReactionRoleService)` - Service ready to receive reaction events
/// - `Err(AppError::PlatformErr)` - The bot's own user could not be resolved
pub async fn bootstrap<P>(
    platform: Arc<P>,
    config: Arc<ReactionRoleConfig>,
    reporter: Arc<dyn ErrorReporter>,
) -> Result<ReactionRoleService<P>, AppError>
where
    P: DiscordPlatform + ?Sized,
{
    let bot_user_id = platform.current_user_id().await?;

    let role_cache = RoleNameCache::new();
    if let Err(e) = role_cache.refresh(&*platform, config.guild_id).await {
        reporter.report(&e);
    }

    let summary = ReactionReconciler::new(platform.clone(), config.clone(), reporter.clone())
        .ensure_reactions()
        .await;
    tracing::info!(
        "Startup reactions: {} added, {} failed",
        summary.added,
        summary.failed
    );

    Ok(ReactionRoleService::new(
        platform,
        config,
        role_cache,
        reporter,
        bot_user_id,
    ))
}
