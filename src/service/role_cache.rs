//! Role display name cache.
//!
//! This module provides the `RoleNameCache` which maps guild roles to their display names
//! for use in user notifications. Each guild's roles are fetched as a full snapshot during
//! startup and swapped in as a whole, so a lookup always sees either the previous snapshot
//! or the new one, never a partial mix. Role renames after startup are not tracked.

use serenity::all::{GuildId, Role, RoleId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::platform::PlatformError;
use crate::platform::DiscordPlatform;

type RoleNames = HashMap<RoleId, String>;

/// Best-effort lookup table from guild roles to display names.
///
/// Cheap to clone, clones share the same snapshots.
#[derive(Clone, Default)]
pub struct RoleNameCache {
    /// Per guild role snapshots, replaced wholesale on refresh.
    guilds: Arc<RwLock<HashMap<GuildId, Arc<RoleNames>>>>,
}

impl RoleNameCache {
    /// Creates an empty cache. Every lookup misses until a guild is refreshed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the guild's role list and replaces its snapshot.
    ///
    /// Roles from a previous snapshot that no longer exist are dropped. On failure the
    /// existing snapshot, if any, is left untouched.
    ///
    /// # Arguments
    /// - `platform` - Discord API used to fetch the role list
    /// - `guild_id` - Guild whose roles to cache
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles now cached for the guild
    /// - `Err(PlatformError)` - Role list could not be fetched
    pub async fn refresh<P>(&self, platform: &P, guild_id: GuildId) -> Result<usize, PlatformError>
    where
        P: DiscordPlatform + ?Sized,
    {
        let roles = platform.guild_roles(guild_id).await?;
        let count = self.replace(guild_id, roles).await;

        tracing::info!("Cached {} roles for guild {}", count, guild_id);

        Ok(count)
    }

    /// Replaces the guild's snapshot with the given roles.
    pub async fn replace(&self, guild_id: GuildId, roles: impl IntoIterator<Item = Role>) -> usize {
        let snapshot: RoleNames = roles
            .into_iter()
            .map(|role| (role.id, role.name))
            .collect();
        let count = snapshot.len();

        self.guilds.write().await.insert(guild_id, Arc::new(snapshot));

        count
    }

    /// Returns the role's display name, or `None` if the guild was never cached or the
    /// role was not part of its snapshot.
    pub async fn lookup(&self, guild_id: GuildId, role_id: RoleId) -> Option<String> {
        let snapshot = self.guilds.read().await.get(&guild_id).cloned()?;

        snapshot.get(&role_id).cloned()
    }
}
