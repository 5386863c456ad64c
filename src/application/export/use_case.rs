//! Export Use Case
//!
//! Runs enumeration, fetching and writing for an already resolved stack.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{
    ControlPlaneError, ExportEvent, ExportEventSink, FileSystem, FunctionConfigSource,
    StackResourceSource,
};
use crate::domain::services::{enumerate_functions, ConfigFetcher};
use crate::domain::value_objects::StackName;
use crate::error::SamvarsResult;

use super::options::ExportOptions;
use super::result::{ExportOutcome, ExportSummary};

/// Export use case - writes every function's environment in a stack to one file
pub struct ExportUseCase<R, F, FS>
where
    R: StackResourceSource,
    F: FunctionConfigSource,
    FS: FileSystem,
{
    resources: R,
    functions: Arc<F>,
    fs: FS,
}

impl<R, F, FS> ExportUseCase<R, F, FS>
where
    R: StackResourceSource,
    F: FunctionConfigSource,
    FS: FileSystem,
{
    /// Create a new export use case
    pub fn new(resources: R, functions: F, fs: FS) -> Self {
        Self {
            resources,
            functions: Arc::new(functions),
            fs,
        }
    }

    /// File system the document is written through
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Export `stack` to `options.output_path`.
    ///
    /// The file is only written once every function was fetched; any failure
    /// before that leaves an existing file untouched.
    pub async fn execute(
        &self,
        stack: &StackName,
        options: &ExportOptions,
        events: &dyn ExportEventSink,
    ) -> SamvarsResult<ExportOutcome> {
        let enumeration = match enumerate_functions(&self.resources, stack).await {
            Ok(enumeration) => enumeration,
            Err(ControlPlaneError::StackNotFound { .. }) => {
                info!(stack = %stack, "stack does not exist, nothing written");
                events.on_event(ExportEvent::StackNotFound {
                    stack: stack.to_string(),
                });
                return Ok(ExportOutcome::StackNotFound {
                    stack: stack.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        events.on_event(ExportEvent::Enumerated {
            stack: stack.to_string(),
            function_count: enumeration.functions.len(),
            page_count: enumeration.page_count,
        });

        let fetcher = ConfigFetcher::new(Arc::clone(&self.functions), options.concurrency);
        let document = fetcher.fetch_all(&enumeration.functions, events).await?;

        let content = document.to_json_pretty()?;
        self.fs.write(&options.output_path, &content)?;
        info!(
            stack = %stack,
            path = %options.output_path.display(),
            functions = document.len(),
            "wrote environment document"
        );

        events.on_event(ExportEvent::Written {
            stack: stack.to_string(),
            path: options.output_path.clone(),
            function_count: document.len(),
        });

        Ok(ExportOutcome::Written(ExportSummary {
            stack: stack.clone(),
            path: options.output_path.clone(),
            document,
        }))
    }
}
