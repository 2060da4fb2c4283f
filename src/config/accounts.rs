//! Monitored-account list configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Settings for the account token list.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    /// Line-delimited token file, one bearer token per monitored account.
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

fn default_token_file() -> PathBuf {
    PathBuf::from("token.txt")
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}
