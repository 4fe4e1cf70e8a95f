//! Workflow graphs attached to automation scripts.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Graph document stored for one automation. `data` is opaque to the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(rename = "ID", default)]
    pub id: i64,
    pub automation_id: i64,
    pub data: serde_json::Value,
}

/// Body of `POST /graph/update`. The backend replaces any previous graph.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateGraphRequest {
    #[validate(range(min = 1, message = "automation_id must be positive"))]
    pub automation_id: i64,
    pub data: serde_json::Value,
}
