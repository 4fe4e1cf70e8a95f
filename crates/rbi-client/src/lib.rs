//! # RBI Client
//!
//! One async method per console backend operation, all sharing a single
//! [`ApiClient`]. Calls are independent: nothing is cached or
//! reordered here, and the only retries are the ones the backend asks for
//! by redirecting a launch back to `/start`.

pub mod automation;
pub mod client;
pub mod container;
pub mod error;
pub mod graph;
pub mod menu;

pub use client::ApiClient;
pub use container::LaunchedContainer;
pub use error::ClientError;
