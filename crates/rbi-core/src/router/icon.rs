//! Icons attached to navigation entries.

use serde::Serialize;

/// Icon reference. Rendering belongs to the UI; the router only names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    AuditOutlined,
    AppstoreOutlined,
    Carbon3DCurveAutoColon,
    ContainerRegistry,
    RecentlyViewed,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::AuditOutlined => "AuditOutlined",
            Icon::AppstoreOutlined => "AppstoreOutlined",
            Icon::Carbon3DCurveAutoColon => "Carbon3DCurveAutoColon",
            Icon::ContainerRegistry => "ContainerRegistry",
            Icon::RecentlyViewed => "RecentlyViewed",
        }
    }

    /// Icon set the glyph comes from.
    pub fn library(&self) -> &'static str {
        match self {
            Icon::AuditOutlined | Icon::AppstoreOutlined => "antd",
            Icon::Carbon3DCurveAutoColon | Icon::ContainerRegistry | Icon::RecentlyViewed => {
                "carbon"
            }
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.library(), self.name())
    }
}
