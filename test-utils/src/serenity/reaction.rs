//! Test factory for creating Serenity Reaction events.

use serenity::all::Reaction;

/// Creates a test reaction event as delivered by the gateway.
///
/// Unicode emoji only; the emoji is sent with a null id the way Discord does for
/// standard emoji.
///
/// # Arguments
/// - `message_id` - Message the reaction was added to or removed from
/// - `channel_id` - Channel containing the message
/// - `guild_id` - Guild containing the channel, `None` for direct messages
/// - `user_id` - User who reacted, `None` to simulate an event without a user
/// - `emoji` - Unicode emoji
///
/// # Panics
/// - If the JSON cannot be deserialized into a Reaction (indicates invalid test data)
pub fn create_test_reaction(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    user_id: Option<u64>,
    emoji: &str,
) -> Reaction {
    serde_json::from_value(serde_json::json!({
        "message_id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "user_id": user_id.map(|id| id.to_string()),
        "emoji": {
            "id": null,
            "name": emoji,
        },
        "burst": false,
        "burst_colors": [],
        "type": 0,
    }))
    .expect("Failed to create test reaction - invalid JSON structure")
}
