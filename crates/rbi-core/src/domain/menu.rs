//! Menu payloads.

use serde::{Deserialize, Serialize};

use crate::router::Icon;

/// Payload of `/api/menu/list`. Items are opaque to the console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuList {
    pub list: Vec<serde_json::Value>,
}

/// Primary-navigation entry derived from a top-level route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    /// Where clicking the item navigates to.
    pub path: String,
    pub icon: Option<Icon>,
    pub sort: i32,
}
