pub mod health;
pub mod menu;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths the mock does not serve.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
