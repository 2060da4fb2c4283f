//! Per-account report rendering.
//!
//! Pure string construction. Either section may be absent; an account with
//! no data at all still renders its header so the chat shows one message per
//! account.

use crate::domain::{NodeStatus, UserInformation};

/// Wallet addresses shorter than this render fully masked.
const WALLET_MIN_DISPLAY_CHARS: usize = 10;
/// Leading wallet characters kept visible.
const WALLET_PREFIX_CHARS: usize = 6;
/// Trailing wallet characters kept visible.
const WALLET_SUFFIX_CHARS: usize = 4;

/// Render the report for one account.
///
/// `index` is the 1-based position of the account in the token list.
pub fn account_report(
    index: usize,
    user: Option<&UserInformation>,
    status: Option<&NodeStatus>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(user) = user {
        parts.push("📱 User Information:".to_string());
        parts.push(format!("👛 Wallet: {}", masked_wallet(&user.wallet_addr)));
        parts.push(format!(
            "🆔 ID: {}",
            masked_identification(&user.unique_identification_code)
        ));
        parts.push(format!("👤 Nickname: {}", user.nickname));
    }

    if let Some(status) = status {
        let (hours, minutes, seconds) = status.time_breakdown();
        let (glyph, label) = if status.is_running() {
            ("🟢", "Running")
        } else {
            ("🔴", "Stopped")
        };

        parts.push("\n⚙️ Node Status:".to_string());
        parts.push(format!("{glyph} Status: {label}"));
        parts.push(format!("⏱ Running Time: {hours}h {minutes}m {seconds}s"));
    }

    format!(
        "🔷 Account #{index}\n{}\n{}",
        "=".repeat(20),
        parts.join("\n")
    )
}

/// Mask a wallet address for display.
///
/// Addresses of at least ten characters show the first six and last four;
/// anything shorter is fully masked, preserving length.
#[must_use]
pub fn masked_wallet(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() < WALLET_MIN_DISPLAY_CHARS {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..WALLET_PREFIX_CHARS].iter().collect();
    let suffix: String = chars[chars.len() - WALLET_SUFFIX_CHARS..].iter().collect();
    format!("{prefix}...{suffix}")
}

/// Mask an identification code: one asterisk per character.
#[must_use]
pub fn masked_identification(code: &str) -> String {
    "*".repeat(code.chars().count())
}
