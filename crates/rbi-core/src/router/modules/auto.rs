//! Automation scripts and their workflow graphs.

use std::sync::Arc;

use crate::router::{Icon, LazyView, RouteEntry, RouteMeta, ViewCatalog, ViewLoader};

pub fn routes(loader: &Arc<dyn ViewLoader>) -> Vec<RouteEntry> {
    vec![RouteEntry::section(
        "/auto",
        "auto",
        RouteMeta::section("自动配置", Icon::Carbon3DCurveAutoColon, 4),
        vec![RouteEntry::index(
            "auto",
            "自动化",
            LazyView::new(ViewCatalog::AUTO, loader.clone()),
        )],
    )]
}
