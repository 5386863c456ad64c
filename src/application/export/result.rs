//! Export result types

use std::path::PathBuf;

use crate::domain::entities::OutputDocument;
use crate::domain::value_objects::StackName;

/// A document that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub stack: StackName,
    pub path: PathBuf,
    pub document: OutputDocument,
}

impl ExportSummary {
    pub fn function_count(&self) -> usize {
        self.document.len()
    }
}

/// How an export run ended
///
/// An unknown stack is a distinct outcome rather than an error, so callers
/// can tell "nothing to export" apart from both success and failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written
    Written(ExportSummary),
    /// The control plane does not know the stack; nothing was written
    StackNotFound { stack: StackName },
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written(_))
    }

    pub fn stack(&self) -> &StackName {
        match self {
            ExportOutcome::Written(summary) => &summary.stack,
            ExportOutcome::StackNotFound { stack } => stack,
        }
    }
}
