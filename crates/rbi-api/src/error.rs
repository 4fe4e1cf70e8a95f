use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rbi_core::Envelope;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
        };

        let body: Envelope<()> = Envelope::error(i32::from(status.as_u16()), &message);
        (status, Json(body)).into_response()
    }
}
