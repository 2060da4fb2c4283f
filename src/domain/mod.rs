//! Platform-agnostic core types.

pub mod account;
pub mod ids;
pub mod token;

pub use account::{NodeStatus, UserInformation};
pub use ids::{ChatId, MessageId};
pub use token::ApiToken;
