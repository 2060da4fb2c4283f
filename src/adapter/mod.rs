//! Concrete implementations of the port traits plus the CLI surface.

pub mod inbound;
pub mod outbound;
