use std::sync::Arc;

use rbi_shared::config::{AppConfig, MockSettings};
use rbi_shared::constants::DEFAULT_APP_NAME;

#[derive(Clone)]
pub struct AppState {
    /// Name reported by `/health`.
    pub app_name: Arc<str>,
    pub mock: Arc<MockSettings>,
}

impl AppState {
    pub fn new(mock: MockSettings) -> Self {
        Self {
            app_name: Arc::from(DEFAULT_APP_NAME),
            mock: Arc::new(mock),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            app_name: Arc::from(config.app.name.as_str()),
            mock: Arc::new(config.mock.clone()),
        }
    }
}
