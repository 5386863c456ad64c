//! JSON Event Sink
//!
//! Outputs export events as NDJSON for scripts and CI.

use crate::domain::ports::{ExportEvent, ExportEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of an event
pub fn event_to_json(event: &ExportEvent) -> serde_json::Value {
    match event {
        ExportEvent::ConfigMissing { path } => serde_json::json!({
            "event": "config_missing",
            "path": path.display().to_string(),
        }),
        ExportEvent::StackResolved { stack, source } => serde_json::json!({
            "event": "resolved",
            "stack": stack,
            "source": source.as_str(),
        }),
        ExportEvent::Enumerated {
            stack,
            function_count,
            page_count,
        } => serde_json::json!({
            "event": "enumerated",
            "stack": stack,
            "function_count": function_count,
            "page_count": page_count,
        }),
        ExportEvent::FunctionFetched {
            index,
            logical_id,
            variable_count,
        } => serde_json::json!({
            "event": "fetched",
            "index": index,
            "logical_id": logical_id,
            "variable_count": variable_count,
        }),
        ExportEvent::Written {
            stack,
            path,
            function_count,
        } => serde_json::json!({
            "event": "written",
            "stack": stack,
            "path": path.display().to_string(),
            "function_count": function_count,
        }),
        ExportEvent::StackNotFound { stack } => serde_json::json!({
            "event": "stack_not_found",
            "stack": stack,
        }),
    }
}

impl ExportEventSink for JsonEventSink {
    fn on_event(&self, event: ExportEvent) {
        self.write_event(event_to_json(&event));
    }
}
