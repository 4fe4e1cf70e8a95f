//! Route fragments, one per functional area of the console.

use std::sync::Arc;

use crate::router::{RouteEntry, ViewLoader};

pub mod audit;
pub mod auto;
pub mod configuration;
pub mod container;
pub mod recently;

/// Every fragment, in registration order.
pub fn all(loader: &Arc<dyn ViewLoader>) -> Vec<Vec<RouteEntry>> {
    vec![
        audit::routes(loader),
        auto::routes(loader),
        configuration::routes(loader),
        container::routes(loader),
        recently::routes(loader),
    ]
}
