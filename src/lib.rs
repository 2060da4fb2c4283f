//! Nodepulse - Multiple.cc account monitoring over Telegram.
//!
//! This crate polls the Multiple.cc REST API on behalf of a list of account
//! tokens and republishes formatted status reports through a Telegram bot
//! command interface, restricted to a single authorized chat.
//!
//! # Architecture
//!
//! The crate separates core types, port traits, and adapters:
//!
//! - **`domain`** - Platform-agnostic types: account snapshots, node status,
//!   credential and chat/message identifiers
//! - **`port`** - Trait definitions at the seams: the upstream account
//!   gateway, the chat messenger, and the token source
//! - **`adapter`** - Concrete implementations: the Multiple.cc REST client,
//!   the Telegram relay (command dispatch, message lifecycle, report
//!   rendering), the token-file source, and the CLI
//! - **`app`** - Application wiring
//! - **`config`** - Configuration loading from TOML files with environment
//!   overrides for secrets
//! - **`error`** - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use nodepulse::app::App;
//! use nodepulse::config::Config;
//!
//! # async fn start() -> nodepulse::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//! App::run(config).await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
