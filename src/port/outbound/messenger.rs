//! Messenger port for the chat platform.

use async_trait::async_trait;

use crate::domain::{ChatId, MessageId};
use crate::error::Result;

/// Plain-text message delivery to a chat.
///
/// Every successful send yields the platform's identifier for the new
/// message, usable to request its deletion later.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a new message to `chat`.
    async fn send(&self, chat: ChatId, text: &str) -> Result<MessageId>;

    /// Send a reply to an existing message in `chat`.
    async fn reply(&self, chat: ChatId, reply_to: MessageId, text: &str) -> Result<MessageId>;

    /// Delete a previously sent message.
    async fn delete(&self, chat: ChatId, message: MessageId) -> Result<()>;
}
