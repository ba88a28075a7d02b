//! Error types for the reaction role bot.
//!
//! `AppError` is the top-level error returned from bootstrap and the gateway client. It
//! wraps the two domain error families: `ConfigError`, which is fatal and aborts startup,
//! and `PlatformError`, which is raised by individual Discord API calls and is contained
//! within the event or startup step that produced it.

pub mod config;
pub mod platform;

use thiserror::Error;

use crate::error::{config::ConfigError, platform::PlatformError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so bootstrap code can use `?`
/// throughout.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot never starts serving with an invalid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API call failed.
    ///
    /// Only reaches this type when a call is required for startup (resolving the bot's own
    /// user), per-event failures are reported and discarded instead.
    #[error(transparent)]
    PlatformErr(#[from] PlatformError),

    /// Discord gateway client error from Serenity.
    ///
    /// Boxed due to large size. Raised when the gateway client fails to build or its
    /// connection terminates with an error.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
