//! Telegram command parsing.

/// Supported relay commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCommand {
    Start,
    Help,
    Info,
}

/// Parse error for Telegram command messages.
///
/// Both variants are handled as no-ops by the dispatcher: plain chatter is
/// ignored, and unknown slash commands deliberately get no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a relay command.
///
/// A trailing `@botname` mention is stripped before matching, so commands
/// addressed to the bot in group chats resolve the same way.
pub fn parse_command(text: &str) -> Result<RelayCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(RelayCommand::Start),
        "/help" => Ok(RelayCommand::Help),
        "/info" => Ok(RelayCommand::Info),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Welcome text returned by `/start`.
#[must_use]
pub const fn welcome_text() -> &'static str {
    "👋 Welcome to Multiple.cc Node Monitor!\n\n\
    Available commands:\n\
    /info - Check node status and information\n\
    /help - Show this help message"
}

/// Help text returned by `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📚 Available Commands:\n\n\
    /info - Display information for all registered nodes\n\
    /help - Show this help message"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Welcome and command overview"),
        ("help", "Show all commands"),
        ("info", "Report status for all registered accounts"),
    ]
}
