//! Gateway port for the upstream account API.

use async_trait::async_trait;

use crate::domain::{ApiToken, NodeStatus, UserInformation};

/// Read-only access to the upstream account API.
///
/// Both operations degrade to `None` on any failure - transport errors,
/// malformed bodies, upstream-reported failures, and missing payload fields
/// are absorbed (and logged) by the implementation, never surfaced to the
/// caller. The caller treats `None` as "omit this section".
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Fetch the profile snapshot for the account behind `token`.
    async fn user_information(&self, token: &ApiToken) -> Option<UserInformation>;

    /// Fetch the node running state for the account behind `token`.
    async fn node_running_status(&self, token: &ApiToken) -> Option<NodeStatus>;
}
