//! # RBI API
//!
//! Axum router for the console's local mock backend.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
