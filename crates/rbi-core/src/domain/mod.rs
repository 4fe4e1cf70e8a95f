//! # RBI Core - Domain Module
//!
//! Payloads exchanged with the console backend.

pub mod automation;
pub mod container;
pub mod envelope;
pub mod graph;
pub mod menu;

pub use automation::{
    Action, ActionType, Automation, NewScriptRequest, RunScriptRequest, UpdateActionsRequest,
    UpdateScriptRequest,
};
pub use container::{ContainerInfo, LaunchContainerRequest, StopContainerRequest};
pub use envelope::Envelope;
pub use graph::{GraphData, UpdateGraphRequest};
pub use menu::{MenuItem, MenuList};
