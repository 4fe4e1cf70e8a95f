// ============================================================================
// RBI Core - Route Registry
// File: crates/rbi-core/src/router/registry.rs
// Description: Merges route fragments into the navigation tree
// ============================================================================

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::modules;
use super::route::RouteEntry;
use super::view::{ViewHandle, ViewLoader};
use crate::domain::MenuItem;
use crate::error::DomainError;

/// Outcome of a completed navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub path: String,
    pub name: String,
    pub title: String,
    /// Title of the section the page belongs to.
    pub section: String,
    pub view: ViewHandle,
}

/// Navigation tree assembled from fragments.
///
/// Entries are kept in registration order; [`RouteRegistry::routes`] applies
/// the display order.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every fragment the console ships with.
    pub fn with_default_fragments(loader: Arc<dyn ViewLoader>) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        for fragment in modules::all(&loader) {
            registry.register(fragment)?;
        }
        Ok(registry)
    }

    /// Appends a fragment. Nothing is added if any entry is rejected.
    pub fn register(&mut self, fragment: Vec<RouteEntry>) -> Result<(), DomainError> {
        let mut seen: HashSet<&str> = self.entries.iter().map(|e| e.path.as_str()).collect();

        for entry in &fragment {
            if !entry.is_top_level() {
                return Err(DomainError::InvalidRoute(format!(
                    "top-level path must be absolute: {}",
                    entry.path
                )));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(DomainError::DuplicateRoute(entry.path.clone()));
            }
            Self::check_children(entry)?;
        }

        debug!(count = fragment.len(), "route fragment registered");
        self.entries.extend(fragment);
        Ok(())
    }

    fn check_children(parent: &RouteEntry) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for child in &parent.children {
            if child.path.is_empty() || child.is_top_level() {
                return Err(DomainError::InvalidRoute(format!(
                    "child path must be relative: {}",
                    parent.child_path(child)
                )));
            }
            if !seen.insert(child.path.as_str()) {
                return Err(DomainError::DuplicateRoute(parent.child_path(child)));
            }
            if child.view().is_none() {
                return Err(DomainError::InvalidRoute(format!(
                    "child route has no view: {}",
                    parent.child_path(child)
                )));
            }
        }
        Ok(())
    }

    /// Top-level entries by `sort` ascending; ties keep registration order.
    pub fn routes(&self) -> Vec<&RouteEntry> {
        let mut routes: Vec<&RouteEntry> = self.entries.iter().collect();
        routes.sort_by_key(|e| e.sort_key());
        routes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matches `/section` or `/section/page`.
    pub fn find(&self, path: &str) -> Option<(&RouteEntry, Option<&RouteEntry>)> {
        let trimmed = path.trim_end_matches('/');
        let rest = trimmed.strip_prefix('/')?;
        let (section, page) = match rest.split_once('/') {
            Some((section, page)) => (section, Some(page)),
            None => (rest, None),
        };

        let parent = self
            .entries
            .iter()
            .find(|e| e.path.trim_start_matches('/') == section)?;

        match page {
            None => Some((parent, None)),
            Some(page) => parent
                .children
                .iter()
                .find(|c| c.path == page)
                .map(|child| (parent, Some(child))),
        }
    }

    /// Resolves the page behind `path`, loading its view on first visit.
    /// A section path lands on its first page.
    pub async fn navigate(&self, path: &str) -> Result<Navigation, DomainError> {
        let (parent, child) = self
            .find(path)
            .ok_or_else(|| DomainError::RouteNotFound(path.to_string()))?;

        let page = match child {
            Some(child) => child,
            None => parent
                .children
                .first()
                .ok_or_else(|| DomainError::RouteNotFound(path.to_string()))?,
        };

        let view = page
            .view()
            .ok_or_else(|| DomainError::InvalidRoute(parent.child_path(page)))?
            .resolve()
            .await?;

        let full_path = parent.child_path(page);
        info!(path = %full_path, module = %view.module, "navigated");

        Ok(Navigation {
            path: full_path,
            name: page.name.clone(),
            title: page.meta.title.clone(),
            section: parent.meta.title.clone(),
            view,
        })
    }

    /// Primary navigation, in display order.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.routes()
            .into_iter()
            .filter(|e| e.meta.is_root)
            .map(|e| MenuItem {
                key: e.name.clone(),
                label: e.meta.title.clone(),
                path: e
                    .children
                    .first()
                    .map(|child| e.child_path(child))
                    .unwrap_or_else(|| e.path.clone()),
                icon: e.meta.icon,
                sort: e.sort_key(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{Icon, LazyView, RouteMeta, ViewCatalog};

    fn loader() -> Arc<dyn ViewLoader> {
        Arc::new(ViewCatalog::default())
    }

    fn section(path: &str, sort: i32) -> RouteEntry {
        let name = path.trim_start_matches('/');
        RouteEntry::section(
            path,
            name,
            RouteMeta::section(name, Icon::AppstoreOutlined, sort),
            vec![RouteEntry::index(
                name,
                name,
                LazyView::new(ViewCatalog::CONTAINER, loader()),
            )],
        )
    }

    #[test]
    fn test_default_tree_display_order() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let paths: Vec<&str> = registry.routes().into_iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/recently", "/container", "/configuration", "/auto", "/audit"]
        );
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let mut registry = RouteRegistry::new();
        registry.register(vec![section("/b", 2)]).unwrap();
        registry.register(vec![section("/a", 2)]).unwrap();
        registry.register(vec![section("/c", 1)]).unwrap();

        let paths: Vec<&str> = registry.routes().into_iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/c", "/b", "/a"]);
    }

    #[test]
    fn test_duplicate_top_level_path_is_rejected() {
        let mut registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let err = registry.register(vec![section("/auto", 9)]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoute(p) if p == "/auto"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_duplicate_child_path_is_rejected() {
        let mut entry = section("/x", 1);
        let again = entry.children[0].clone();
        entry.children.push(again);

        let mut registry = RouteRegistry::new();
        let err = registry.register(vec![entry]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoute(p) if p == "/x/index"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_find() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let (parent, child) = registry.find("/container/index").unwrap();
        assert_eq!(parent.name, "container");
        assert_eq!(child.unwrap().path, "index");

        let (parent, child) = registry.find("/auto/").unwrap();
        assert_eq!(parent.path, "/auto");
        assert!(child.is_none());

        assert!(registry.find("/auto/missing").is_none());
        assert!(registry.find("auto").is_none());
    }

    #[tokio::test]
    async fn test_navigate_resolves_view_lazily() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let (_, page) = registry.find("/configuration/index").unwrap();
        assert!(!page.unwrap().view().unwrap().is_resolved());

        let nav = registry.navigate("/configuration/index").await.unwrap();
        assert_eq!(nav.path, "/configuration/index");
        assert_eq!(nav.view.module, ViewCatalog::CONFIGURATION);
        assert!(page.unwrap().view().unwrap().is_resolved());
    }

    #[tokio::test]
    async fn test_section_path_lands_on_index() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let nav = registry.navigate("/auto").await.unwrap();
        assert_eq!(nav.path, "/auto/index");
        assert_eq!(nav.title, "自动化");
        assert_eq!(nav.section, "自动配置");
    }

    #[tokio::test]
    async fn test_navigate_unknown_path() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let err = registry.navigate("/nowhere").await.unwrap_err();
        assert!(matches!(err, DomainError::RouteNotFound(_)));
    }

    #[tokio::test]
    async fn test_navigate_surfaces_loader_failure() {
        let empty: Arc<dyn ViewLoader> = Arc::new(ViewCatalog::new(Vec::<String>::new()));
        let registry = RouteRegistry::with_default_fragments(empty).unwrap();
        let err = registry.navigate("/recently/index").await.unwrap_err();
        assert!(matches!(err, DomainError::ViewNotFound(_)));
    }

    #[test]
    fn test_menu_follows_display_order() {
        let registry = RouteRegistry::with_default_fragments(loader()).unwrap();
        let menu = registry.menu();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0].key, "recently");
        assert_eq!(menu[0].path, "/recently/index");
        assert_eq!(menu[0].icon, Some(Icon::RecentlyViewed));
        assert_eq!(menu[4].key, "audit");
    }
}
