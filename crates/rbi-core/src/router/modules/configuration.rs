use std::sync::Arc;

use crate::router::{Icon, LazyView, RouteEntry, RouteMeta, ViewCatalog, ViewLoader};

pub fn routes(loader: &Arc<dyn ViewLoader>) -> Vec<RouteEntry> {
    vec![RouteEntry::section(
        "/configuration",
        "configuration",
        RouteMeta::section("配置管理", Icon::AppstoreOutlined, 3),
        vec![RouteEntry::index(
            "configuration",
            "配置管理",
            LazyView::new(ViewCatalog::CONFIGURATION, loader.clone()),
        )],
    )]
}
