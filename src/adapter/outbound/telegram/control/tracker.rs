//! Sent-message bookkeeping for the authorized chat.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{ChatId, MessageId};
use crate::error::Result;
use crate::port::outbound::messenger::Messenger;

/// Ordered record of the messages the relay has sent since the last clear.
///
/// Every send appends before any later delete-all can observe it, and
/// [`clear_all`](Self::clear_all) always leaves the record empty even when
/// individual deletes fail (the message may already be gone, or the bot may
/// lack delete permission).
pub struct MessageTracker {
    messenger: Arc<dyn Messenger>,
    sent: Vec<MessageId>,
}

impl MessageTracker {
    #[must_use]
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self {
            messenger,
            sent: Vec::new(),
        }
    }

    /// Append an identifier to the record.
    pub fn record(&mut self, message: MessageId) {
        self.sent.push(message);
    }

    /// Identifiers currently tracked, in send order.
    #[must_use]
    pub fn tracked(&self) -> &[MessageId] {
        &self.sent
    }

    /// Send a message and record its identifier.
    pub async fn send_and_record(&mut self, chat: ChatId, text: &str) -> Result<MessageId> {
        let message = self.messenger.send(chat, text).await?;
        self.record(message);
        Ok(message)
    }

    /// Reply to a message and record the reply's identifier.
    pub async fn reply_and_record(
        &mut self,
        chat: ChatId,
        reply_to: MessageId,
        text: &str,
    ) -> Result<MessageId> {
        let message = self.messenger.reply(chat, reply_to, text).await?;
        self.record(message);
        Ok(message)
    }

    /// Delete every tracked message, then empty the record unconditionally.
    ///
    /// An individual delete failure is logged and skipped; the remaining
    /// deletes still run.
    pub async fn clear_all(&mut self, chat: ChatId) {
        for &message in &self.sent {
            if let Err(err) = self.messenger.delete(chat, message).await {
                warn!(message_id = message.0, error = %err, "Failed to delete tracked message");
            }
        }
        self.sent.clear();
    }
}
