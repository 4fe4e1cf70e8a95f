//! # RBI Core
//!
//! Backend payload types and the console's navigation model: route
//! fragments, lazily resolved views and the registry that merges them.

pub mod domain;
pub mod router;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use router::{
    Component, Icon, LazyView, Navigation, RouteEntry, RouteMeta, RouteRegistry, ViewCatalog,
    ViewHandle, ViewLoader,
};
