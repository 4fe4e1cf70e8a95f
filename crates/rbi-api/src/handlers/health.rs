//! Liveness of the mock backend.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct MockHealth {
    status: &'static str,
    service: String,
    version: &'static str,
    /// Latency the menu listing currently simulates.
    menu_delay_ms: u64,
}

pub async fn health_check(State(state): State<AppState>) -> Json<MockHealth> {
    Json(MockHealth {
        status: "healthy",
        service: state.app_name.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        menu_delay_ms: state.mock.menu_delay_ms,
    })
}
