//! Container sessions managed by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Running container as listed by `GET /list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "ContainerId")]
    pub container_id: String,
    #[serde(rename = "IP", default)]
    pub ip: String,
    #[serde(rename = "Port", default)]
    pub port: String,
    /// First port of the UDP range reserved for the container.
    #[serde(rename = "MinPort", default)]
    pub min_port: i32,
    #[serde(rename = "ExpireAt")]
    pub expire_at: Option<DateTime<Utc>>,
}

impl ContainerInfo {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_at.map(|at| at <= now).unwrap_or(false)
    }
}

/// Query of `POST /start`.
#[derive(Debug, Clone, Validate)]
pub struct LaunchContainerRequest {
    #[validate(url(message = "fileUrl must be a valid URL"))]
    pub file_url: String,
}

/// Body of `POST /stop`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct StopContainerRequest {
    #[serde(rename = "containerId")]
    #[validate(length(min = 1, message = "containerId is required"))]
    pub container_id: String,
}
