//! Menu listing served by the console's mock backend.

use rbi_core::{Envelope, MenuList};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// `GET /api/menu/list`, unwrapped from its envelope.
    pub async fn list_menu(&self) -> Result<MenuList, ClientError> {
        let envelope: Envelope<MenuList> = self.get_json("/api/menu/list", &[]).await?;
        if !envelope.is_success() {
            return Err(ClientError::UnexpectedResponse(format!(
                "menu listing failed with code {}: {}",
                envelope.code, envelope.message
            )));
        }
        Ok(envelope.data.unwrap_or_default())
    }
}
