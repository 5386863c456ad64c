//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod control_plane;
pub mod export_events;
pub mod file_system;
pub mod prompter;
pub mod stack_config;

pub use control_plane::{
    ControlPlaneError, FunctionConfigSource, ResourcePage, StackResourceSource,
};
pub use export_events::{ExportEvent, ExportEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use prompter::Prompter;
pub use stack_config::{ConfigLookup, StackConfigSource};
