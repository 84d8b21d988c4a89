//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the bot: the shared
//! command context, the poise framework wiring, and all slash commands.

/// Discord command implementations (general, account, rank)
pub mod commands;

use crate::config::AppConfig;
use crate::db::GuildStores;
use crate::errors;
use poise::serenity_prelude as serenity;
use tracing::{info, instrument};

/// Shared data available to all bot commands.
#[derive(Debug)]
pub struct BotData {
    /// Lazily opened per-guild account stores
    pub stores: GuildStores,
    /// HTTP client for the rank lookup
    pub http: reqwest::Client,
}

impl BotData {
    /// Creates the shared command context for the given store registry.
    #[must_use]
    pub fn new(stores: GuildStores) -> Self {
        Self {
            stores,
            http: reqwest::Client::new(),
        }
    }
}

// Type aliases for the context types Poise will use
pub(crate) type Error = errors::Error;
pub(crate) type Context<'a> = poise::Context<'a, BotData, Error>;
pub(crate) type ApplicationContext<'a> = poise::ApplicationContext<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {}", error)).await {
                tracing::error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e)
            }
        }
    }
}

/// Connects to the gateway, registers all slash commands globally, and runs
/// the event loop until the client stops.
#[instrument(skip(config))]
pub async fn run(config: &AppConfig) -> Result<(), serenity::Error> {
    let data = BotData::new(GuildStores::new(&config.data_dir));

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::hello(),
                commands::about(),
                commands::time(),
                commands::help(),
                commands::create_scrim(),
                commands::register(),
                commands::login(),
                commands::change_password(),
                commands::rank(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Successfully registered application commands.");
                Ok(data)
            })
        })
        .build();

    // Guild and message-content intents
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::Client::builder(&config.discord_token, intents)
        .framework(framework)
        .activity(serenity::ActivityData::playing("xenonesports.gg"))
        .status(serenity::OnlineStatus::Online)
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                tracing::error!("Client error: {:?}", why);
                return Err(why);
            }
        }
        Err(e) => {
            tracing::error!("Error creating client: {:?}", e);
            return Err(e);
        }
    }
    Ok(())
}
