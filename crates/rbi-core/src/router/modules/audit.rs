//! Audit service. Reuses the container view until auditing gets its own.

use std::sync::Arc;

use crate::router::{Icon, LazyView, RouteEntry, RouteMeta, ViewCatalog, ViewLoader};

pub fn routes(loader: &Arc<dyn ViewLoader>) -> Vec<RouteEntry> {
    vec![RouteEntry::section(
        "/audit",
        "audit",
        RouteMeta::section("审计服务", Icon::AuditOutlined, 6),
        vec![RouteEntry::index(
            "audit",
            "审计服务",
            LazyView::new(ViewCatalog::CONTAINER, loader.clone()),
        )],
    )]
}
