//! Handlers for the `check` diagnostic subcommands.

use std::path::Path;
use std::sync::Arc;

use teloxide::Bot;

use super::command::CheckTarget;
use super::output;
use crate::adapter::outbound::telegram::TelegramMessenger;
use crate::adapter::outbound::tokens::FileTokenSource;
use crate::config::Config;
use crate::error::Result;
use crate::port::outbound::messenger::Messenger;
use crate::port::outbound::tokens::TokenSource;

/// Execute one diagnostic check.
pub async fn execute(target: CheckTarget, config_path: &Path) -> Result<()> {
    match target {
        CheckTarget::Config => check_config(config_path),
        CheckTarget::Tokens => check_tokens(config_path),
        CheckTarget::Telegram => check_telegram(config_path).await,
    }
}

/// Load and validate the configuration, then print a summary.
fn check_config(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    output::section("Config Check");
    output::field("Config file", config_path.display());
    output::field("Bot token", config.telegram.masked_token());
    output::field("Chat id", config.telegram.chat_id()?);
    output::field("Upstream", &config.upstream.api_url);
    output::field("Token file", config.accounts.token_file.display());
    output::action_done("Validated", "configuration");

    Ok(())
}

/// Inspect the account token list without revealing credentials.
fn check_tokens(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let source = FileTokenSource::new(config.accounts.token_file.clone());
    let tokens = source.load();

    output::section("Token Check");
    output::field("Token file", config.accounts.token_file.display());
    output::field("Accounts", tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        output::field(&format!("Account #{}", position + 1), token.masked());
    }

    if tokens.is_empty() {
        output::hint("add one bearer token per line to the token file");
    }

    Ok(())
}

/// Send a test message to the authorized chat.
async fn check_telegram(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let chat = config.telegram.chat_id()?;
    let bot = Bot::new(config.telegram.bot_token()?);
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot));

    output::section("Telegram Check");
    output::field("Bot token", config.telegram.masked_token());
    output::field("Chat id", chat);

    messenger
        .send(chat, "✅ nodepulse test message - the relay can reach this chat")
        .await?;

    output::action_done("Sent", "Telegram test message");
    output::hint("check Telegram for the message");

    Ok(())
}
