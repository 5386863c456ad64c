//! Export Event Port
//!
//! Provides an observable interface for the export pipeline.
//! Enables human-readable progress, NDJSON event streams, and testing.

use std::path::PathBuf;

use crate::domain::value_objects::StackNameSource;

/// Event emitted during an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    /// The config file used for the default stack name does not exist
    ConfigMissing { path: PathBuf },

    /// A stack name was resolved
    StackResolved {
        stack: String,
        source: StackNameSource,
    },

    /// Stack resources were listed and filtered
    Enumerated {
        stack: String,
        function_count: usize,
        page_count: usize,
    },

    /// One function's environment was fetched
    FunctionFetched {
        index: usize,
        logical_id: String,
        variable_count: usize,
    },

    /// The output document was written
    Written {
        stack: String,
        path: PathBuf,
        function_count: usize,
    },

    /// The control plane reported the stack as unknown
    StackNotFound { stack: String },
}

/// Trait for receiving export events
///
/// Implementations:
/// - `TextEventSink`: human-readable messages on stdout
/// - `JsonEventSink`: NDJSON event stream for scripts
/// - `NoopEventSink`: silent operation
pub trait ExportEventSink: Send + Sync {
    /// Handle an export event
    fn on_event(&self, event: ExportEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ExportEventSink for NoopEventSink {
    fn on_event(&self, _event: ExportEvent) {}
}
