//! Outbound ports: dependencies the relay calls into.

pub mod gateway;
pub mod messenger;
pub mod tokens;

pub use gateway::AccountGateway;
pub use messenger::Messenger;
pub use tokens::TokenSource;
