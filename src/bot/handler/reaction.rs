//! Reaction event handlers for the managed message.
//!
//! Both handlers convert Serenity's `Reaction` into a `ReactionEvent` and delegate to the
//! `ReactionRoleService`. Reactions in direct messages or without a user id can't map to
//! a guild role and are dropped here.

use serenity::all::{Context, Reaction};

use crate::model::reaction::ReactionEvent;
use crate::platform::DiscordPlatform;
use crate::service::{ReactionRoleService, SyncOutcome};

/// Handles the reaction_add event by granting the mapped role.
///
/// # Arguments
/// - `service` - Reaction role service performing the role change
/// - `_ctx` - Discord context (unused, the service owns its own HTTP client)
/// - `reaction` - The added reaction
pub async fn handle_reaction_add<P>(service: &ReactionRoleService<P>, _ctx: Context, reaction: Reaction)
where
    P: DiscordPlatform + ?Sized,
{
    let Some(event) = ReactionEvent::from_reaction(&reaction) else {
        return;
    };

    log_outcome(&event, service.handle_add(&event).await);
}

/// Handles the reaction_remove event by revoking the mapped role.
///
/// # Arguments
/// - `service` - Reaction role service performing the role change
/// - `_ctx` - Discord context (unused, the service owns its own HTTP client)
/// - `reaction` - The removed reaction
pub async fn handle_reaction_remove<P>(
    service: &ReactionRoleService<P>,
    _ctx: Context,
    reaction: Reaction,
) where
    P: DiscordPlatform + ?Sized,
{
    let Some(event) = ReactionEvent::from_reaction(&reaction) else {
        return;
    };

    log_outcome(&event, service.handle_remove(&event).await);
}

fn log_outcome(event: &ReactionEvent, outcome: SyncOutcome) {
    match outcome {
        SyncOutcome::Ignored => {}
        SyncOutcome::Applied {
            mutation,
            notified: false,
        } => {
            tracing::warn!(
                "User {} was not notified of their change to role {}",
                event.user_id,
                mutation.role_id
            );
        }
        SyncOutcome::Applied { .. } => {}
        SyncOutcome::Failed { mutation } => {
            tracing::debug!(
                "{:?} of role {} failed for user {} after {} reaction",
                mutation.direction,
                mutation.role_id,
                mutation.user_id,
                event.emoji
            );
        }
    }
}
