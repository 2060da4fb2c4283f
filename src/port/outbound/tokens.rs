//! Source of the monitored-account credentials.

use crate::domain::ApiToken;

/// Provider of the account token list.
///
/// Load order defines the 1-based account numbering used in reports. An
/// unavailable source yields an empty list (logged by the implementation),
/// never an error; the caller decides how to surface emptiness.
pub trait TokenSource: Send + Sync {
    fn load(&self) -> Vec<ApiToken>;
}
