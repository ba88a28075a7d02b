use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::platform::SerenityPlatform;
use crate::service::TracingReporter;
use crate::startup;

/// Bootstraps the reaction role service and builds the gateway client.
///
/// Role caching and startup reactions run over the REST API before the gateway client is
/// created, so no reaction event can be handled before the role cache is populated.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Client)` - Gateway client ready to be started
/// - `Err(AppError)` - Invalid token or client construction failed
pub async fn init_bot(config: Config) -> Result<Client, AppError> {
    let http = Arc::new(Http::new(&config.discord_bot_token));
    let platform = Arc::new(SerenityPlatform::new(http));

    let service = startup::bootstrap(
        platform,
        Arc::new(config.reaction_roles),
        Arc::new(TracingReporter),
    )
    .await?;

    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(Arc::new(service)))
        .await?;

    Ok(client)
}

/// Runs the gateway client until it fails or the process is interrupted.
///
/// Ctrl+C and SIGTERM shut down every shard so the client returns cleanly.
///
/// # Arguments
/// - `client` - Gateway client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutting down Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Bot is running. Press CTRL+C to exit.");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
