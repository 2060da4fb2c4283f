//! Messenger port implementation over the Telegram Bot API.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::Requester;
use teloxide::types::{ChatId as TgChatId, MessageId as TgMessageId, ReplyParameters};
use teloxide::Bot;

use crate::domain::{ChatId, MessageId};
use crate::error::Result;
use crate::port::outbound::messenger::Messenger;

/// [`Messenger`] backed by a teloxide [`Bot`].
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, chat: ChatId, text: &str) -> Result<MessageId> {
        let sent = self.bot.send_message(TgChatId(chat.0), text).await?;
        Ok(MessageId(sent.id.0))
    }

    async fn reply(&self, chat: ChatId, reply_to: MessageId, text: &str) -> Result<MessageId> {
        let sent = self
            .bot
            .send_message(TgChatId(chat.0), text)
            .reply_parameters(ReplyParameters::new(TgMessageId(reply_to.0)))
            .await?;
        Ok(MessageId(sent.id.0))
    }

    async fn delete(&self, chat: ChatId, message: MessageId) -> Result<()> {
        self.bot
            .delete_message(TgChatId(chat.0), TgMessageId(message.0))
            .await?;
        Ok(())
    }
}
