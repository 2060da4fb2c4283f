//! Upstream Multiple.cc API configuration.

use serde::Deserialize;

/// Upstream API settings.
///
/// The origin, referer, and user-agent defaults mimic the Multiple.cc web
/// client; the upstream rejects requests without them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// `origin` header sent with every request.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// `referer` header sent with every request.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// `user-agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://api.app.multiple.cc".into()
}

fn default_origin() -> String {
    "https://www.app.multiple.cc".into()
}

fn default_referer() -> String {
    "https://www.app.multiple.cc/".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            origin: default_origin(),
            referer: default_referer(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
