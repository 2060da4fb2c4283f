//! Relay control: authorization, message lifecycle, and command dispatch.
//!
//! [`RelayControl`] owns everything a command invocation needs: the upstream
//! gateway, the token source, the messenger, and the tracked-message list.
//! The tracker sits behind a mutex held for a whole authorized invocation,
//! so commands for the chat are handled one at a time.

mod dispatch;
pub mod render;
mod tracker;


use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ChatId;
use crate::port::outbound::gateway::AccountGateway;
use crate::port::outbound::messenger::Messenger;
use crate::port::outbound::tokens::TokenSource;

pub use tracker::MessageTracker;

/// Command handling for the single authorized chat.
pub struct RelayControl {
    gateway: Arc<dyn AccountGateway>,
    tokens: Arc<dyn TokenSource>,
    messenger: Arc<dyn Messenger>,
    allowed_chat: ChatId,
    /// Messages sent since the last clear. The lock doubles as the per-chat
    /// command queue: an invocation holds it until its last reply is sent.
    tracker: Mutex<MessageTracker>,
}

impl RelayControl {
    #[must_use]
    pub fn new(
        gateway: Arc<dyn AccountGateway>,
        tokens: Arc<dyn TokenSource>,
        messenger: Arc<dyn Messenger>,
        allowed_chat: ChatId,
    ) -> Self {
        let tracker = Mutex::new(MessageTracker::new(Arc::clone(&messenger)));
        Self {
            gateway,
            tokens,
            messenger,
            allowed_chat,
            tracker,
        }
    }
}
