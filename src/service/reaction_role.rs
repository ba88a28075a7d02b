//! Reaction role synchronization.
//!
//! This module provides the `ReactionRoleService` which keeps role membership in step with
//! the reactions on the designated message. A reaction added to that message with a
//! configured emoji grants the mapped role, removing it revokes the role. Successful
//! changes are followed by a direct message to the user.
//!
//! Handlers may run concurrently for any number of events. The service holds no mutable
//! state of its own, the configuration is read-only and the role cache is only written
//! during startup, so events never wait on each other. Whether a user already holds a
//! role is left to Discord: granting a held role or revoking a missing one succeeds
//! without effect.

use serenity::all::UserId;
use std::sync::Arc;

use crate::config::ReactionRoleConfig;
use crate::model::reaction::{emoji_label, MutationDirection, ReactionEvent, RoleMutation};
use crate::model::reaction_map::ReactionRole;
use crate::platform::DiscordPlatform;
use crate::service::{ErrorReporter, Notifier, RoleNameCache};

/// Result of handling one reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Event does not concern the managed message, was made by the bot, or used an
    /// emoji without a mapped role. No API calls were made.
    Ignored,
    /// Role was changed. `notified` is false when the direct message could not be sent.
    Applied {
        mutation: RoleMutation,
        notified: bool,
    },
    /// Discord rejected the role change, the user was not notified.
    Failed { mutation: RoleMutation },
}

pub struct ReactionRoleService<P: ?Sized> {
    platform: Arc<P>,
    config: Arc<ReactionRoleConfig>,
    role_cache: RoleNameCache,
    notifier: Notifier<P>,
    reporter: Arc<dyn ErrorReporter>,
    /// The bot's own user, whose reactions are never acted on.
    bot_user_id: UserId,
}

impl<P: DiscordPlatform + ?Sized> ReactionRoleService<P> {
    pub fn new(
        platform: Arc<P>,
        config: Arc<ReactionRoleConfig>,
        role_cache: RoleNameCache,
        reporter: Arc<dyn ErrorReporter>,
        bot_user_id: UserId,
    ) -> Self {
        Self {
            notifier: Notifier::new(platform.clone(), reporter.clone()),
            platform,
            config,
            role_cache,
            reporter,
            bot_user_id,
        }
    }

    pub fn config(&self) -> &ReactionRoleConfig {
        &self.config
    }

    /// Grants the mapped role for a reaction added to the managed message.
    pub async fn handle_add(&self, event: &ReactionEvent) -> SyncOutcome {
        self.synchronize(event, MutationDirection::Grant).await
    }

    /// Revokes the mapped role for a reaction removed from the managed message.
    pub async fn handle_remove(&self, event: &ReactionEvent) -> SyncOutcome {
        self.synchronize(event, MutationDirection::Revoke).await
    }

    /// Returns the configured entry for the event, or `None` if the event is not ours
    /// to act on.
    fn resolve(&self, event: &ReactionEvent) -> Option<&ReactionRole> {
        if event.message_id != self.config.message_id || event.user_id == self.bot_user_id {
            return None;
        }

        self.config.reactions.role_for(&event.emoji)
    }

    async fn synchronize(&self, event: &ReactionEvent, direction: MutationDirection) -> SyncOutcome {
        let Some(entry) = self.resolve(event) else {
            return SyncOutcome::Ignored;
        };

        let mutation = RoleMutation {
            guild_id: event.guild_id,
            user_id: event.user_id,
            role_id: entry.role_id,
            direction,
        };

        let result = match direction {
            MutationDirection::Grant => {
                self.platform
                    .grant_role(mutation.guild_id, mutation.user_id, mutation.role_id)
                    .await
            }
            MutationDirection::Revoke => {
                self.platform
                    .revoke_role(mutation.guild_id, mutation.user_id, mutation.role_id)
                    .await
            }
        };

        if let Err(e) = result {
            self.reporter.report(&e);
            return SyncOutcome::Failed { mutation };
        }

        tracing::info!(
            "{:?} role {} for user {} via {} in channel {}",
            direction,
            mutation.role_id,
            mutation.user_id,
            event.emoji,
            event.channel_id
        );

        let role_name = self
            .role_cache
            .lookup(mutation.guild_id, mutation.role_id)
            .await
            .unwrap_or_else(|| mutation.role_id.to_string());

        let notified = self
            .notifier
            .notify(
                mutation.user_id,
                &direction.notification(&role_name, &emoji_label(&event.emoji)),
            )
            .await;

        SyncOutcome::Applied { mutation, notified }
    }
}
