//! Lazily resolved views.
//!
//! A child route does not hold its view, only a [`LazyView`]: the module
//! name plus the [`ViewLoader`] able to produce it. The first navigation runs
//! the loader; every later navigation reuses the cached [`ViewHandle`].

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::DomainError;

/// Resolved view, ready to be mounted by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewHandle {
    pub module: String,
    pub resolved_at: DateTime<Utc>,
}

impl ViewHandle {
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            resolved_at: Utc::now(),
        }
    }
}

/// Asynchronous view factory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, module: &str) -> Result<ViewHandle, DomainError>;
}

/// Loader backed by the set of view modules shipped with the console.
#[derive(Debug, Clone)]
pub struct ViewCatalog {
    modules: BTreeSet<String>,
}

impl ViewCatalog {
    pub const RECENTLY: &'static str = "views/recently/index";
    pub const CONTAINER: &'static str = "views/container/index";
    pub const CONFIGURATION: &'static str = "views/configuration/index";
    pub const AUTO: &'static str = "views/auto/index";

    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }
}

impl Default for ViewCatalog {
    fn default() -> Self {
        Self::new([Self::RECENTLY, Self::CONTAINER, Self::CONFIGURATION, Self::AUTO])
    }
}

#[async_trait]
impl ViewLoader for ViewCatalog {
    async fn load(&self, module: &str) -> Result<ViewHandle, DomainError> {
        if !self.contains(module) {
            return Err(DomainError::ViewNotFound(module.to_string()));
        }
        debug!(module, "view module loaded");
        Ok(ViewHandle::new(module))
    }
}

/// View resolved on first use and cached afterwards.
///
/// Clones share the cache. Concurrent first navigations share one load; a
/// failed or abandoned load leaves the cache empty so the next navigation
/// retries.
#[derive(Clone)]
pub struct LazyView {
    module: Arc<str>,
    loader: Arc<dyn ViewLoader>,
    cell: Arc<OnceCell<ViewHandle>>,
}

impl LazyView {
    pub fn new(module: &str, loader: Arc<dyn ViewLoader>) -> Self {
        Self {
            module: Arc::from(module),
            loader,
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn resolve(&self) -> Result<ViewHandle, DomainError> {
        self.cell
            .get_or_try_init(|| async {
                debug!(module = %self.module, "resolving view");
                self.loader.load(&self.module).await
            })
            .await
            .cloned()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("module", &self.module)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
