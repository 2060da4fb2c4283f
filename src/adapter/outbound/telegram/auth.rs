//! Authorization for Telegram command handling.

use tracing::warn;

use crate::domain::ChatId;

/// Reply sent to senders outside the authorized chat.
pub const UNAUTHORIZED_TEXT: &str = "⛔ Unauthorized access";

/// Check if a chat is authorized to command the relay.
///
/// Exactly one chat is ever authorized; everything else is denied.
pub fn is_authorized_chat(incoming_chat: ChatId, allowed_chat: ChatId) -> bool {
    if incoming_chat == allowed_chat {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Denying Telegram command from unauthorized chat"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_chat_is_authorized() {
        assert!(is_authorized_chat(ChatId(42), ChatId(42)));
    }

    #[test]
    fn different_chats_are_denied() {
        let allowed = ChatId(12_345);
        assert!(!is_authorized_chat(ChatId(1), allowed));
        assert!(!is_authorized_chat(ChatId(0), allowed));
        assert!(!is_authorized_chat(ChatId(-12_345), allowed));
        assert!(!is_authorized_chat(ChatId(99_999), allowed));
    }

    #[test]
    fn negative_group_chat_ids_compare_exactly() {
        // Telegram groups have negative chat ids.
        let allowed = ChatId(-123_456_789);
        assert!(is_authorized_chat(allowed, allowed));
        assert!(!is_authorized_chat(ChatId(-987_654_321), allowed));
        assert!(!is_authorized_chat(ChatId(123_456_789), allowed));
    }
}
