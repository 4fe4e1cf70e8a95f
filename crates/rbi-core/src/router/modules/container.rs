//! Container sessions.

use std::sync::Arc;

use crate::router::{Icon, LazyView, RouteEntry, RouteMeta, ViewCatalog, ViewLoader};

pub fn routes(loader: &Arc<dyn ViewLoader>) -> Vec<RouteEntry> {
    vec![RouteEntry::section(
        "/container",
        "container",
        RouteMeta::section("容器管理", Icon::ContainerRegistry, 1),
        vec![RouteEntry::index(
            "container",
            "容器管理",
            LazyView::new(ViewCatalog::CONTAINER, loader.clone()),
        )],
    )]
}
