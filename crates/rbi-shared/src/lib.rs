//! # RBI Shared
//!
//! Configuration, telemetry, constants and the website branding shared by
//! every crate of the RBI console.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;
pub mod website;

pub use error::AppError;
pub use website::WebsiteConfig;
