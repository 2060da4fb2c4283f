//! Trait definitions at the application's seams.

pub mod outbound;

pub use outbound::{AccountGateway, Messenger, TokenSource};
