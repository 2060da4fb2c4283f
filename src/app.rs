//! Application wiring.

use std::sync::Arc;

use teloxide::Bot;

use crate::adapter::outbound::multiple::MultipleClient;
use crate::adapter::outbound::telegram::{self, RelayControl, TelegramMessenger};
use crate::adapter::outbound::tokens::FileTokenSource;
use crate::config::Config;
use crate::error::Result;
use crate::port::outbound::gateway::AccountGateway;
use crate::port::outbound::messenger::Messenger;
use crate::port::outbound::tokens::TokenSource;

/// Top-level application.
pub struct App;

impl App {
    /// Build the adapters, wire the relay control, and run the update loop.
    pub async fn run(config: Config) -> Result<()> {
        let bot = Bot::new(config.telegram.bot_token()?);
        let allowed_chat = config.telegram.chat_id()?;

        let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));
        let gateway: Arc<dyn AccountGateway> =
            Arc::new(MultipleClient::from_config(&config.upstream));
        let tokens: Arc<dyn TokenSource> =
            Arc::new(FileTokenSource::new(config.accounts.token_file.clone()));

        let control = Arc::new(RelayControl::new(gateway, tokens, messenger, allowed_chat));

        telegram::run_relay(bot, control, allowed_chat).await;

        Ok(())
    }
}
