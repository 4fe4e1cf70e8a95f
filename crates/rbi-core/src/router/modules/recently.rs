//! Quick access to recently opened items.

use std::sync::Arc;

use crate::router::{Icon, LazyView, RouteEntry, RouteMeta, ViewCatalog, ViewLoader};

pub fn routes(loader: &Arc<dyn ViewLoader>) -> Vec<RouteEntry> {
    vec![RouteEntry::section(
        "/recently",
        "recently",
        RouteMeta::section("快速访问", Icon::RecentlyViewed, 0),
        vec![RouteEntry::index(
            "recently",
            "快速访问",
            LazyView::new(ViewCatalog::RECENTLY, loader.clone()),
        )],
    )]
}
