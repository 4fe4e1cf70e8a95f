//! Navigation model of the console shell.

pub mod icon;
pub mod modules;
pub mod registry;
pub mod route;
pub mod view;

pub use icon::Icon;
pub use registry::{Navigation, RouteRegistry};
pub use route::{Component, RouteEntry, RouteMeta};
pub use view::{LazyView, ViewCatalog, ViewHandle, ViewLoader};
