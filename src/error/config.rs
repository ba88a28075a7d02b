use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The reaction role file could not be read.
    #[error("Failed to read reaction role config '{path}': {source}")]
    ReadFile {
        /// Path that was attempted
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reaction role file is not valid JSON or is missing required fields.
    #[error("Failed to parse reaction role config '{path}': {source}")]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A Discord identifier is not a valid non-zero snowflake.
    ///
    /// Discord ids are 64-bit integers serialized as strings, e.g. `"123456789012345678"`.
    #[error("Invalid {field} '{value}': expected a non-zero numeric Discord ID")]
    InvalidId {
        /// Name of the config field holding the id
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// An emoji key in the reaction map can't be used as a reaction.
    #[error("Invalid emoji '{0}' in reaction map")]
    InvalidEmoji(String),

    /// The reaction map has no entries, so the bot would have nothing to manage.
    #[error("Reaction map is empty")]
    EmptyReactionMap,
}
