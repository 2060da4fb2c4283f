//! Account snapshots returned by the upstream API.

/// Profile data for one monitored account.
///
/// Immutable snapshot of a single `GetInformation` response; created per
/// fetch and discarded after the report is rendered. All fields are required
/// upstream - a response missing any of them yields no snapshot at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInformation {
    pub wallet_addr: String,
    pub unique_identification_code: String,
    /// Fetched but intentionally not rendered in reports.
    pub email: String,
    pub nickname: String,
    /// Fetched but intentionally not rendered in reports.
    pub avatar_url: String,
    pub email_verification_status: i64,
}

/// Node state value reported as "running" upstream.
const NODE_RUNNING: i64 = 1;

/// Running state of the node behind one account.
///
/// `node_status` is carried verbatim: 0 means stopped, 1 means running, and
/// any other value is passed through and rendered as stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStatus {
    pub node_status: i64,
    pub total_running_time_secs: u64,
}

impl NodeStatus {
    /// True when the upstream reports the node as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.node_status == NODE_RUNNING
    }

    /// Split the total running time into (hours, minutes, seconds).
    #[must_use]
    pub fn time_breakdown(&self) -> (u64, u64, u64) {
        let hours = self.total_running_time_secs / 3600;
        let remainder = self.total_running_time_secs % 3600;
        (hours, remainder / 60, remainder % 60)
    }
}
