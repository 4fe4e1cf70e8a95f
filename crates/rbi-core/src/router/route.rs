//! Route entries.

use serde::Serialize;

use super::icon::Icon;
use super::view::LazyView;

/// What a route mounts.
#[derive(Debug, Clone)]
pub enum Component {
    /// Shared application frame hosting the child views.
    Layout,
    View(LazyView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMeta {
    pub title: String,
    pub icon: Option<Icon>,
    pub sort: Option<i32>,
    /// Shown in primary navigation.
    pub is_root: bool,
}

impl RouteMeta {
    pub fn section(title: &str, icon: Icon, sort: i32) -> Self {
        Self {
            title: title.to_string(),
            icon: Some(icon),
            sort: Some(sort),
            is_root: true,
        }
    }

    pub fn page(title: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: None,
            sort: None,
            is_root: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub component: Component,
    pub meta: RouteMeta,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Top-level entry hosted by the application layout.
    pub fn section(path: &str, name: &str, meta: RouteMeta, children: Vec<RouteEntry>) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            component: Component::Layout,
            meta,
            children,
        }
    }

    /// The `index` page of a section.
    pub fn index(name: &str, title: &str, view: LazyView) -> Self {
        Self {
            path: "index".to_string(),
            name: name.to_string(),
            component: Component::View(view),
            meta: RouteMeta::page(title),
            children: Vec::new(),
        }
    }

    pub fn view(&self) -> Option<&LazyView> {
        match &self.component {
            Component::View(view) => Some(view),
            Component::Layout => None,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.path.starts_with('/')
    }

    /// Display order among top-level entries; unsorted entries go last.
    pub fn sort_key(&self) -> i32 {
        self.meta.sort.unwrap_or(i32::MAX)
    }

    /// Absolute path of a child of this entry.
    pub fn child_path(&self, child: &RouteEntry) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), child.path)
    }
}
