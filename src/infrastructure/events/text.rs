//! Text Event Sink
//!
//! Prints export progress as plain messages on stdout.

use crate::domain::ports::{ExportEvent, ExportEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints human-readable messages
///
/// Notices (missing config, unknown stack, completion) are always printed;
/// per-step progress only with `-v`.
pub struct TextEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl TextEventSink {
    /// Create a text sink writing to stdout
    pub fn stdout(verbose: u8) -> Self {
        Self::with_writer(io::stdout(), verbose)
    }

    /// Create a text sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn message(&self, event: &ExportEvent) -> Option<String> {
        match event {
            ExportEvent::ConfigMissing { path } => Some(format!(
                "{} does not exist. Please provide the CloudFormation stack name.",
                path.display()
            )),
            ExportEvent::StackNotFound { stack } => Some(format!(
                "Error: CloudFormation stack '{}' does not exist.",
                stack
            )),
            ExportEvent::Written { stack, path, .. } => Some(format!(
                "Environment variables for all Lambdas in the stack '{}' written to {}",
                stack,
                path.display()
            )),
            ExportEvent::StackResolved { stack, source } if self.verbose > 0 => {
                Some(format!("Using stack '{}' (from {})", stack, source))
            }
            ExportEvent::Enumerated {
                function_count,
                page_count,
                ..
            } if self.verbose > 0 => Some(format!(
                "Found {} Lambda function(s) across {} page(s)",
                function_count, page_count
            )),
            ExportEvent::FunctionFetched {
                logical_id,
                variable_count,
                ..
            } if self.verbose > 0 => Some(format!(
                "  {} ({} variable(s))",
                logical_id, variable_count
            )),
            _ => None,
        }
    }
}

impl ExportEventSink for TextEventSink {
    fn on_event(&self, event: ExportEvent) {
        let Some(line) = self.message(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
