use serenity::all::UserId;
use std::sync::Arc;

use crate::platform::DiscordPlatform;
use crate::service::report::ErrorReporter;

/// Sends one-shot informational direct messages.
///
/// Delivery is best effort: users with direct messages disabled, unknown users and
/// transient API failures are reported and then dropped. A failed notification never
/// affects the role change it describes.
pub struct Notifier<P: ?Sized> {
    platform: Arc<P>,
    reporter: Arc<dyn ErrorReporter>,
}

impl<P: DiscordPlatform + ?Sized> Notifier<P> {
    pub fn new(platform: Arc<P>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { platform, reporter }
    }

    /// Sends `message` to the user's direct message channel.
    ///
    /// # Returns
    /// - `true` - Message was delivered
    /// - `false` - Channel creation or sending failed, the error has been reported
    pub async fn notify(&self, user_id: UserId, message: &str) -> bool {
        let channel_id = match self.platform.create_direct_channel(user_id).await {
            Ok(channel_id) => channel_id,
            Err(e) => {
                self.reporter.report(&e);
                return false;
            }
        };

        if let Err(e) = self.platform.send_message(channel_id, message).await {
            self.reporter.report(&e);
            return false;
        }

        tracing::debug!("Sent notification to user {}", user_id);

        true
    }
}
