//! Envelope responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rbi_core::Envelope;
use serde::Serialize;

/// JSON body wrapped in the console's `{code, data, message, type}` envelope.
pub struct ApiResponse<T: Serialize>(pub Envelope<T>);

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self(Envelope::success(data))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
