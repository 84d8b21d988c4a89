//! Unified error type for the bot.
//!
//! Account-flow variants carry user-facing messages so commands can surface
//! them directly as replies; infrastructure variants wrap the underlying
//! library errors via `#[from]`.

use thiserror::Error;

/// All errors the bot can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Environment variable lookup failed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Outbound HTTP request failed
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Password hashing or verification failed
    #[error("Password hashing error: {0}")]
    Hash(#[from] argon2::Error),

    /// Registration attempted for a user id that already has a row
    #[error("You already have an account.")]
    AccountAlreadyExists {
        /// Discord user id of the duplicate registration
        user_id: String,
    },

    /// Login or password change attempted without a prior registration
    #[error("You don't have an account yet. Use /register to create one.")]
    AccountNotFound {
        /// Discord user id that has no account row
        user_id: String,
    },

    /// Supplied password did not match the stored hash
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// Supplied password failed the length constraint
    #[error("Invalid password: {reason}")]
    InvalidPassword {
        /// Which constraint was violated
        reason: String,
    },

    /// Rank page fetched but no rating could be extracted
    #[error("No rating found for {username}.")]
    RatingNotFound {
        /// Profile name that was looked up
        username: String,
    },

    /// Account command invoked outside a guild
    #[error("This command only works in a server.")]
    GuildOnly,

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::FrameworkError(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
