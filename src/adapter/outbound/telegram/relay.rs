//! Telegram update loop.
//!
//! Listens for messages, feeds their text through the relay control, and
//! registers the command menu so the three commands appear under "/".

use std::sync::Arc;

use teloxide::prelude::Requester;
use teloxide::types::{BotCommand, Message};
use teloxide::{respond, Bot};
use tracing::{info, warn};

use super::command::bot_commands;
use super::control::RelayControl;
use crate::domain::{ChatId, MessageId};

/// Run the relay until the update listener stops.
pub async fn run_relay(bot: Bot, control: Arc<RelayControl>, allowed_chat: ChatId) {
    // Register commands with Telegram so they appear in the "/" menu.
    if let Err(err) = register_bot_commands(&bot).await {
        warn!(error = %err, "Failed to register bot commands with Telegram");
    }

    info!(chat_id = allowed_chat.0, "Telegram relay started");

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let control = Arc::clone(&control);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            control
                .handle_message(ChatId(msg.chat.id.0), MessageId(msg.id.0), text)
                .await;

            respond(())
        }
    })
    .await;

    warn!("Telegram relay shutting down");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
