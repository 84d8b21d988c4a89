//! Environment-based application configuration.
//!
//! The bot is configured entirely through environment variables (typically
//! supplied via a `.env` file during development and the hosting platform's
//! environment in production).

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Default port for the health endpoint when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Discord bot token, required
    pub discord_token: String,
    /// Port the health endpoint binds to
    pub port: u16,
    /// Directory holding the per-guild account store files
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DISCORD_BOT_TOKEN` — Bot token from the Discord Developer Portal
    ///
    /// Optional:
    /// - `PORT` — Health endpoint port (default 3000)
    /// - `DATA_DIR` — Directory for guild account stores (default `data`)
    pub fn from_env() -> Result<Self> {
        let discord_token = std::env::var("DISCORD_BOT_TOKEN").map_err(|_| Error::Config {
            message: "DISCORD_BOT_TOKEN environment variable is required".to_string(),
        })?;

        let port = parse_port(std::env::var("PORT").ok())?;
        let data_dir = std::env::var("DATA_DIR")
            .map_or_else(|_| PathBuf::from("data"), PathBuf::from);

        Ok(Self {
            discord_token,
            port,
            data_dir,
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16> {
    match value {
        Some(raw) if !raw.is_empty() => raw.trim().parse().map_err(|_| Error::Config {
            message: format!("Invalid PORT value: '{raw}'"),
        }),
        _ => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some(String::new())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_accepts_valid_values() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 3001 ".to_string())).unwrap(), 3001);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let result = parse_port(Some("not-a-port".to_string()));
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = parse_port(Some("70000".to_string()));
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
