//! Command dispatch for the authorized chat.

use tracing::{debug, info, warn};

use super::super::auth::{self, UNAUTHORIZED_TEXT};
use super::super::command::{
    command_help, parse_command, welcome_text, CommandParseError, RelayCommand,
};
use super::render;
use super::{MessageTracker, RelayControl};
use crate::domain::{ApiToken, ChatId, MessageId};
use crate::error::Result;

const NO_TOKENS_TEXT: &str = "❌ No tokens found. Please add tokens to token.txt";

impl RelayControl {
    /// Handle one incoming text message.
    ///
    /// Non-commands and unrecognized commands are no-ops. Unauthorized
    /// senders get a direct (untracked) denial and nothing else happens.
    /// Every authorized command first deletes the previous batch of replies.
    pub async fn handle_message(&self, chat: ChatId, message: MessageId, text: &str) {
        let command = match parse_command(text) {
            Ok(command) => command,
            Err(CommandParseError::NotACommand) => return,
            Err(err) => {
                debug!(%err, "Ignoring unrecognized command");
                return;
            }
        };

        if !auth::is_authorized_chat(chat, self.allowed_chat) {
            if let Err(err) = self.messenger.reply(chat, message, UNAUTHORIZED_TEXT).await {
                warn!(error = %err, "Failed to send unauthorized reply");
            }
            return;
        }

        info!(chat_id = chat.0, ?command, "Handling command");

        // One authorized command at a time; the previous batch of replies is
        // cleared no matter which command follows.
        let mut tracker = self.tracker.lock().await;
        tracker.clear_all(chat).await;

        match command {
            RelayCommand::Start => {
                self.reply_static(&mut tracker, chat, message, welcome_text())
                    .await;
            }
            RelayCommand::Help => {
                self.reply_static(&mut tracker, chat, message, command_help())
                    .await;
            }
            RelayCommand::Info => {
                self.report_accounts(&mut tracker, chat, message).await;
            }
        }
    }

    async fn reply_static(
        &self,
        tracker: &mut MessageTracker,
        chat: ChatId,
        reply_to: MessageId,
        text: &str,
    ) {
        if let Err(err) = tracker.reply_and_record(chat, reply_to, text).await {
            warn!(error = %err, "Failed to send command reply");
        }
    }

    /// Report the status of every registered account, one message each.
    async fn report_accounts(
        &self,
        tracker: &mut MessageTracker,
        chat: ChatId,
        reply_to: MessageId,
    ) {
        let tokens = self.tokens.load();
        if tokens.is_empty() {
            self.reply_static(tracker, chat, reply_to, NO_TOKENS_TEXT)
                .await;
            return;
        }

        if let Err(err) = self.aggregate(tracker, chat, reply_to, &tokens).await {
            warn!(error = %err, "Account aggregation aborted");
            let text = format!("❌ Error occurred: {err}");
            self.reply_static(tracker, chat, reply_to, &text).await;
        }
    }

    /// Fetch and report each account in list order.
    ///
    /// A send failure aborts the remaining accounts; reports already sent
    /// stay in the chat (and in the tracker).
    async fn aggregate(
        &self,
        tracker: &mut MessageTracker,
        chat: ChatId,
        reply_to: MessageId,
        tokens: &[ApiToken],
    ) -> Result<()> {
        tracker
            .reply_and_record(
                chat,
                reply_to,
                &format!("📊 Found {} accounts. Fetching information...", tokens.len()),
            )
            .await?;

        // Sequential by design: the next account's fetch starts only after
        // the previous account's message is sent.
        for (position, token) in tokens.iter().enumerate() {
            let user = self.gateway.user_information(token).await;
            let status = self.gateway.node_running_status(token).await;
            let report = render::account_report(position + 1, user.as_ref(), status.as_ref());
            tracker.reply_and_record(chat, reply_to, &report).await?;
        }

        Ok(())
    }
}
