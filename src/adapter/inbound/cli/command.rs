//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Telegram relay bot for Multiple.cc node accounts.
#[derive(Debug, Parser)]
#[command(name = "nodepulse", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Default, Subcommand)]
pub enum CliCommand {
    /// Start the relay (default when no subcommand is given).
    #[default]
    Run,

    /// Diagnostic checks against the local setup.
    #[command(subcommand)]
    Check(CheckTarget),
}

#[derive(Debug, Subcommand)]
pub enum CheckTarget {
    /// Load and validate the configuration.
    Config,
    /// Inspect the account token list (masked).
    Tokens,
    /// Send a test message to the authorized chat.
    Telegram,
}
