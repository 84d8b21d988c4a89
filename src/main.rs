//! Binary entrypoint - wires configuration, the health endpoint, and the bot.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use xenon_bot::{bot, config::AppConfig, errors::Result, server};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenvy::dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load configuration. A missing bot token is fatal here, before any
    // connection attempt.
    let config = AppConfig::from_env()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Health endpoint for the hosting platform
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = server::serve(port).await {
            error!("Health endpoint error: {}", e);
        }
    });

    // 5. Run the bot
    bot::run(&config).await?;

    Ok(())
}
