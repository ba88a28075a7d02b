//! Startup reaction reconciliation.
//!
//! Re-adds every configured emoji to the managed message when the bot starts so users
//! always have all reactions to click, no matter what happened to the message while the
//! bot was offline. Each emoji is attempted on its own: a failure is reported and the
//! remaining emoji are still added.

use std::sync::Arc;

use crate::config::ReactionRoleConfig;
use crate::platform::DiscordPlatform;
use crate::service::ErrorReporter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub added: usize,
    pub failed: usize,
}

pub struct ReactionReconciler<P: ?Sized> {
    platform: Arc<P>,
    config: Arc<ReactionRoleConfig>,
    reporter: Arc<dyn ErrorReporter>,
}

impl<P: DiscordPlatform + ?Sized> ReactionReconciler<P> {
    pub fn new(
        platform: Arc<P>,
        config: Arc<ReactionRoleConfig>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            platform,
            config,
            reporter,
        }
    }

    /// Adds one reaction per configured emoji to the managed message.
    ///
    /// Existing reactions are not checked first, adding a reaction the bot already placed
    /// is a no-op on Discord's side.
    pub async fn ensure_reactions(&self) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        for entry in self.config.reactions.iter() {
            match self
                .platform
                .add_reaction(self.config.channel_id, self.config.message_id, &entry.emoji)
                .await
            {
                Ok(()) => {
                    tracing::info!("Added reaction: {}", entry.symbol);
                    summary.added += 1;
                }
                Err(e) => {
                    self.reporter.report(&e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
