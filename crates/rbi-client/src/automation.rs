//! Automation script operations.

use rbi_core::{
    Automation, DomainError, NewScriptRequest, RunScriptRequest, UpdateActionsRequest,
    UpdateScriptRequest,
};
use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// `GET /automation/getScripts`
    pub async fn get_scripts(&self) -> Result<Vec<Automation>, ClientError> {
        self.get_json("/automation/getScripts", &[]).await
    }

    /// `POST /automation/newScript`
    pub async fn add_new_script(&self, data: &NewScriptRequest) -> Result<String, ClientError> {
        data.validate()?;
        let message = self.post_text("/automation/newScript", &[], Some(data)).await?;
        info!(name = %data.name, "automation script created");
        Ok(message)
    }

    /// `POST /automation/delScript?id=..`
    pub async fn del_script(&self, id: &str) -> Result<String, ClientError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("script id is required".to_string()).into());
        }
        self.post_text::<()>("/automation/delScript", &[("id", id)], None).await
    }

    /// `POST /automation/updateScript`
    pub async fn update_script(&self, data: &UpdateScriptRequest) -> Result<String, ClientError> {
        data.validate()?;
        self.post_text("/automation/updateScript", &[], Some(data)).await
    }

    /// `POST /automation/updateAction`: replaces the actions of one script.
    pub async fn update_actions(&self, data: &UpdateActionsRequest) -> Result<String, ClientError> {
        data.validate()?;
        self.post_text("/automation/updateAction", &[], Some(data)).await
    }

    /// `POST /automation/runScript`
    pub async fn run_script(&self, data: &RunScriptRequest) -> Result<String, ClientError> {
        data.validate()?;
        info!(automation_id = data.automation_id, "running automation script");
        self.post_text("/automation/runScript", &[], Some(data)).await
    }
}
