//! Mock menu listing.

use std::time::Duration;

use axum::extract::State;
use rbi_core::MenuList;
use tracing::debug;

use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /api/menu/list`: an empty list, after the configured delay.
pub async fn list_menu(State(state): State<AppState>) -> ApiResponse<MenuList> {
    let delay = Duration::from_millis(state.mock.menu_delay_ms);
    debug!(delay_ms = state.mock.menu_delay_ms, "serving mock menu");
    tokio::time::sleep(delay).await;
    ApiResponse::success(MenuList::default())
}
