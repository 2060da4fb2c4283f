//! Multiple.cc REST API adapter.

mod client;
mod dto;

pub use client::MultipleClient;
