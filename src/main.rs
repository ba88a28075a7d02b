mod bot;
mod config;
mod error;
mod model;
mod platform;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Loaded {} reaction roles for guild {}",
        config.reaction_roles.reactions.len(),
        config.reaction_roles.guild_id
    );

    let client = bot::start::init_bot(config).await?;

    bot::start::start_bot(client).await
}
