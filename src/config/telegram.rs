//! Telegram relay configuration.

use std::fmt;

use serde::Deserialize;

use crate::domain::ChatId;
use crate::error::{ConfigError, Result};

/// Telegram relay configuration.
///
/// The bot token is populated from the `TELEGRAM_BOT_TOKEN` environment
/// variable during [`Config::load`](crate::config::Config::load); it is
/// deliberately not deserialized so a token committed to a config file is
/// ignored. The chat id may live in the file or come from `CHAT_ID`.
#[derive(Clone, Default, Deserialize)]
pub struct TelegramRelayConfig {
    /// Bot API token obtained from BotFather. Environment only.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// The single chat authorized to command the relay.
    #[serde(default)]
    pub chat_id: Option<i64>,
}

impl TelegramRelayConfig {
    /// The bot token, or the error the caller should surface at startup.
    pub fn bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| {
                ConfigError::MissingField {
                    field: "telegram.bot_token (TELEGRAM_BOT_TOKEN)",
                }
                .into()
            })
    }

    /// The authorized chat id.
    pub fn chat_id(&self) -> Result<ChatId> {
        self.chat_id.map(ChatId).ok_or_else(|| {
            ConfigError::MissingField {
                field: "telegram.chat_id (CHAT_ID)",
            }
            .into()
        })
    }

    /// Masked bot token for diagnostics output.
    #[must_use]
    pub fn masked_token(&self) -> String {
        match self.bot_token.as_deref() {
            Some(token) if token.chars().count() > 8 => {
                let visible: String = token.chars().take(8).collect();
                format!("{visible}****")
            }
            Some(_) => "****".to_string(),
            None => "<unset>".to_string(),
        }
    }
}

// The token must never appear in debug output or logs.
impl fmt::Debug for TelegramRelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramRelayConfig")
            .field("bot_token", &self.masked_token())
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
