//! Multiple.cc REST API client.
//!
//! Two endpoints, both bearer-token authenticated and wrapped in the shared
//! response envelope:
//! - `GET /User/GetInformation` - account profile
//! - `GET /User/GetNodeRunningStatus` - node state and uptime
//!
//! The upstream only accepts requests carrying the web client's `origin`,
//! `referer`, and `user-agent` headers, so those are installed as default
//! headers on the underlying HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ApiEnvelope, NodeStatusDto, UserInformationDto};
use crate::config::UpstreamConfig;
use crate::domain::{ApiToken, NodeStatus, UserInformation};
use crate::error::{Error, Result};
use crate::port::outbound::gateway::AccountGateway;

const USER_INFORMATION_PATH: &str = "/User/GetInformation";
const NODE_RUNNING_STATUS_PATH: &str = "/User/GetNodeRunningStatus";

/// HTTP client for the Multiple.cc REST API.
///
/// One instance serves every monitored account; the bearer token is applied
/// per request. Implements the [`AccountGateway`] port, absorbing all
/// failures into "no data" as the port contract requires.
pub struct MultipleClient {
    http: HttpClient,
    base_url: String,
}

impl MultipleClient {
    #[must_use]
    pub fn from_config(config: &UpstreamConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .default_headers(default_headers(config))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the account profile, surfacing the failure cause.
    pub async fn get_user_information(&self, token: &ApiToken) -> Result<UserInformation> {
        let dto: UserInformationDto = self.fetch(USER_INFORMATION_PATH, token).await?;
        Ok(dto.into())
    }

    /// Fetch the node running state, surfacing the failure cause.
    pub async fn get_node_running_status(&self, token: &ApiToken) -> Result<NodeStatus> {
        let dto: NodeStatusDto = self.fetch(NODE_RUNNING_STATUS_PATH, token).await?;
        Ok(dto.into())
    }

    async fn fetch<T>(&self, path: &str, token: &ApiToken) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Fetching from upstream");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope<T> = response.json().await?;

        if !envelope.success {
            return Err(Error::Upstream(
                envelope
                    .error_message
                    .unwrap_or_else(|| "unspecified upstream failure".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| Error::Upstream("response missing data payload".to_string()))
    }
}

#[async_trait]
impl AccountGateway for MultipleClient {
    async fn user_information(&self, token: &ApiToken) -> Option<UserInformation> {
        match self.get_user_information(token).await {
            Ok(info) => Some(info),
            Err(err) => {
                warn!(token = %token, error = %err, "User information fetch failed");
                None
            }
        }
    }

    async fn node_running_status(&self, token: &ApiToken) -> Option<NodeStatus> {
        match self.get_node_running_status(token).await {
            Ok(status) => Some(status),
            Err(err) => {
                warn!(token = %token, error = %err, "Node status fetch failed");
                None
            }
        }
    }
}

/// Headers sent with every upstream request.
fn default_headers(config: &UpstreamConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let pairs = [
        (ORIGIN, config.origin.as_str()),
        (REFERER, config.referer.as_str()),
        (USER_AGENT, config.user_agent.as_str()),
    ];
    for (name, value) in pairs {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(err) => {
                warn!(header = %name, error = %err, "Skipping invalid header value");
            }
        }
    }

    headers
}
