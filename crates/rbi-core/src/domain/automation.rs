// ============================================================================
// RBI Core - Automation Scripts
// File: crates/rbi-core/src/domain/automation.rs
// Description: Browser automation scripts and the payloads that edit them
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Step kinds the backend knows how to replay in a remote browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Navigate,
    WaitVisible,
    SendKeys,
    Click,
}

/// One step of an automation script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_action_fields"))]
pub struct Action {
    #[serde(rename = "ActionID", default)]
    pub action_id: i64,

    #[serde(rename = "AutomationID", default)]
    pub automation_id: i64,

    #[serde(rename = "Sequence")]
    #[validate(range(min = 0, message = "Sequence must not be negative"))]
    pub sequence: i32,

    #[serde(rename = "ActionType")]
    pub action_type: ActionType,

    #[serde(rename = "Selector", default)]
    #[validate(length(max = 255, message = "Selector too long"))]
    pub selector: String,

    #[serde(rename = "Value", default)]
    #[validate(length(max = 255, message = "Value too long"))]
    pub value: String,

    #[serde(rename = "URL", default)]
    #[validate(length(max = 255, message = "URL too long"))]
    pub url: String,
}

impl Action {
    pub fn navigate(sequence: i32, url: &str) -> Self {
        Self::new(sequence, ActionType::Navigate, "", "", url)
    }

    pub fn wait_visible(sequence: i32, selector: &str) -> Self {
        Self::new(sequence, ActionType::WaitVisible, selector, "", "")
    }

    pub fn send_keys(sequence: i32, selector: &str, value: &str) -> Self {
        Self::new(sequence, ActionType::SendKeys, selector, value, "")
    }

    pub fn click(sequence: i32, selector: &str) -> Self {
        Self::new(sequence, ActionType::Click, selector, "", "")
    }

    fn new(sequence: i32, action_type: ActionType, selector: &str, value: &str, url: &str) -> Self {
        Self {
            action_id: 0,
            automation_id: 0,
            sequence,
            action_type,
            selector: selector.trim().to_string(),
            value: value.to_string(),
            url: url.trim().to_string(),
        }
    }
}

fn validate_action_fields(action: &Action) -> Result<(), ValidationError> {
    let missing = match action.action_type {
        ActionType::Navigate => action.url.is_empty().then_some("navigate_requires_url"),
        ActionType::WaitVisible | ActionType::Click | ActionType::SendKeys => {
            action.selector.is_empty().then_some("selector_required")
        }
    };

    match missing {
        Some(code) => Err(ValidationError::new(code)),
        None => Ok(()),
    }
}

/// Automation script as listed by `/automation/getScripts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automation {
    #[serde(rename = "AutomationID")]
    pub automation_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "Actions", default)]
    pub actions: Vec<Action>,
}

impl Automation {
    /// Actions in replay order.
    pub fn ordered_actions(&self) -> Vec<&Action> {
        let mut actions: Vec<&Action> = self.actions.iter().collect();
        actions.sort_by_key(|a| a.sequence);
        actions
    }
}

/// Body of `POST /automation/newScript`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewScriptRequest {
    #[serde(rename = "UserID")]
    #[validate(range(min = 0, message = "UserID must not be negative"))]
    pub user_id: i64,

    #[serde(rename = "Name")]
    #[validate(length(min = 1, max = 100, message = "Script name must be 1-100 characters"))]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Actions")]
    #[validate(nested)]
    pub actions: Vec<Action>,
}

/// Body of `POST /automation/updateScript`: the full script, keyed by id.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateScriptRequest {
    #[serde(rename = "AutomationID")]
    #[validate(range(min = 1, message = "AutomationID must be positive"))]
    pub automation_id: i64,

    #[serde(rename = "Name")]
    #[validate(length(min = 1, max = 100, message = "Script name must be 1-100 characters"))]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Actions")]
    #[validate(nested)]
    pub actions: Vec<Action>,
}

impl From<&Automation> for UpdateScriptRequest {
    fn from(automation: &Automation) -> Self {
        Self {
            automation_id: automation.automation_id,
            name: automation.name.clone(),
            description: automation.description.clone(),
            actions: automation.actions.clone(),
        }
    }
}

/// Body of `POST /automation/updateAction`: replaces every action of a script.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateActionsRequest {
    #[validate(range(min = 1, message = "automation_id must be positive"))]
    pub automation_id: i64,

    #[validate(nested)]
    pub actions: Vec<Action>,
}

/// Body of `POST /automation/runScript`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RunScriptRequest {
    #[validate(range(min = 1, message = "automation_id must be positive"))]
    pub automation_id: i64,

    /// DevTools endpoint of the browser the script drives.
    #[validate(url(message = "remote_url must be a valid URL"))]
    pub remote_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_listing() {
        let body = r##"[{
            "AutomationID": 3,
            "UserID": 1,
            "Name": "login",
            "Description": "sign in",
            "CreatedAt": "2024-10-01T08:30:00+08:00",
            "Actions": [
                {"ActionID": 2, "AutomationID": 3, "Sequence": 2, "ActionType": "click", "Selector": "#go", "Value": "", "URL": ""},
                {"ActionID": 1, "AutomationID": 3, "Sequence": 1, "ActionType": "navigate", "Selector": "", "Value": "", "URL": "https://example.com"}
            ]
        }]"##;

        let scripts: Vec<Automation> = serde_json::from_str(body).unwrap();
        assert_eq!(scripts.len(), 1);
        let ordered = scripts[0].ordered_actions();
        assert_eq!(ordered[0].action_type, ActionType::Navigate);
        assert_eq!(ordered[1].action_type, ActionType::Click);
    }

    #[test]
    fn test_new_script_uses_backend_field_names() {
        let request = NewScriptRequest {
            user_id: 1,
            name: "login".to_string(),
            description: String::new(),
            actions: vec![Action::send_keys(1, "#user", "admin")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Name"], "login");
        assert_eq!(json["Actions"][0]["ActionType"], "sendKeys");
        assert_eq!(json["Actions"][0]["Selector"], "#user");
    }

    #[test]
    fn test_action_requires_fields_for_its_type() {
        assert!(Action::navigate(1, "https://example.com").validate().is_ok());
        assert!(Action::navigate(1, "").validate().is_err());
        assert!(Action::click(1, "").validate().is_err());
        assert!(Action::wait_visible(1, "body").validate().is_ok());
    }

    #[test]
    fn test_nested_action_errors_fail_the_request() {
        let request = UpdateActionsRequest {
            automation_id: 4,
            actions: vec![Action::click(1, "#ok"), Action::click(2, "")],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_run_script_requires_url() {
        let request = RunScriptRequest {
            automation_id: 1,
            remote_url: "not a url".to_string(),
        };
        assert!(request.validate().is_err());

        let request = RunScriptRequest {
            automation_id: 1,
            remote_url: "ws://127.0.0.1:9222/devtools/browser/abc".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
