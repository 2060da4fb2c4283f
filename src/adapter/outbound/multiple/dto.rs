//! Wire types for the Multiple.cc API.
//!
//! Every response is wrapped in the same envelope:
//! `{ "success": bool, "errorMessage": string?, "data": {...}? }`.
//! Payload fields are required; a response missing any of them fails
//! deserialization and is treated as "no data" by the client.

use serde::Deserialize;

use crate::domain::{NodeStatus, UserInformation};

/// Response envelope shared by all endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub data: Option<T>,
}

/// `GET /User/GetInformation` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInformationDto {
    pub wallet_addr: String,
    pub unique_identification_code: String,
    pub email: String,
    pub nickname: String,
    pub avatar_url: String,
    pub email_verification_status: i64,
}

impl From<UserInformationDto> for UserInformation {
    fn from(dto: UserInformationDto) -> Self {
        Self {
            wallet_addr: dto.wallet_addr,
            unique_identification_code: dto.unique_identification_code,
            email: dto.email,
            nickname: dto.nickname,
            avatar_url: dto.avatar_url,
            email_verification_status: dto.email_verification_status,
        }
    }
}

/// `GET /User/GetNodeRunningStatus` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatusDto {
    pub node_status: i64,
    pub nodes_total_running_time: u64,
}

impl From<NodeStatusDto> for NodeStatus {
    fn from(dto: NodeStatusDto) -> Self {
        Self {
            node_status: dto.node_status,
            total_running_time_secs: dto.nodes_total_running_time,
        }
    }
}
