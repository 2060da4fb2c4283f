//! Outbound adapters: upstream API, chat platform, token file.

pub mod multiple;
pub mod telegram;
pub mod tokens;
