//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Route already registered: {0}")]
    DuplicateRoute(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("View not found: {0}")]
    ViewNotFound(String),

    #[error("View failed to load: {0}")]
    ViewLoadFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),
}
