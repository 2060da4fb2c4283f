//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for the secrets (`TELEGRAM_BOT_TOKEN`) and the authorized chat
//! (`CHAT_ID`). A missing config file is not an error - the relay can run
//! from environment variables and defaults alone.

use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::{ConfigError, Result};

mod accounts;
mod logging;
mod telegram;
mod upstream;

pub use accounts::AccountsConfig;
pub use logging::LoggingConfig;
pub use telegram::TelegramRelayConfig;
pub use upstream::UpstreamConfig;

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram relay configuration.
    ///
    /// The bot token is loaded from `TELEGRAM_BOT_TOKEN` and never from the
    /// config file.
    #[serde(default)]
    pub telegram: TelegramRelayConfig,

    /// Upstream Multiple.cc API settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Monitored-account token list settings.
    #[serde(default)]
    pub accounts: AccountsConfig,
}

impl Config {
    /// Load configuration from `path`, apply environment overrides, and
    /// validate.
    ///
    /// A missing file falls back to defaults; an unreadable or unparsable
    /// file is an error. A missing bot token or chat id is fatal here - the
    /// relay cannot start without either.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.as_ref().display(), "No config file, using defaults");
                Self::default()
            }
            Err(err) => return Err(ConfigError::ReadFile(err).into()),
        };

        // Bot token comes from the environment only (never from the config
        // file); the chat id may be overridden the same way.
        config.telegram.bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        if let Ok(raw) = std::env::var("CHAT_ID") {
            let chat_id = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "telegram.chat_id",
                reason: format!("`{raw}` is not a numeric chat id"),
            })?;
            config.telegram.chat_id = Some(chat_id);
        }

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.is_none() {
            return Err(ConfigError::MissingField {
                field: "telegram.bot_token (TELEGRAM_BOT_TOKEN)",
            }
            .into());
        }
        if self.telegram.chat_id.is_none() {
            return Err(ConfigError::MissingField {
                field: "telegram.chat_id (CHAT_ID)",
            }
            .into());
        }
        if self.upstream.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "upstream.api_url",
            }
            .into());
        }
        if let Err(err) = Url::parse(&self.upstream.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "upstream.api_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream.timeout_ms",
                reason: "timeout must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
