use serenity::all::{Context, EventHandler, Reaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::platform::SerenityPlatform;
use crate::service::ReactionRoleService;

pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub service: Arc<ReactionRoleService<SerenityPlatform>>,
}

impl Handler {
    pub fn new(service: Arc<ReactionRoleService<SerenityPlatform>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.service, ctx, ready).await;
    }

    /// Called when a reaction is added to any message the bot can see
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.service, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from any message the bot can see
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.service, ctx, removed_reaction).await;
    }
}
