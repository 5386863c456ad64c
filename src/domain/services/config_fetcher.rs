//! Configuration Fetcher
//!
//! Fetches the environment of every enumerated function with bounded
//! concurrency and assembles the output document in enumeration order.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::debug;

use crate::domain::entities::{EnvironmentMap, OutputDocument, ResourceDescriptor};
use crate::domain::ports::{ExportEvent, ExportEventSink, FunctionConfigSource};
use crate::error::{SamvarsError, SamvarsResult};

/// Default number of in-flight `GetFunctionConfiguration` calls
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Fetches function environments through a shared source.
pub struct ConfigFetcher<F>
where
    F: FunctionConfigSource,
{
    source: Arc<F>,
    concurrency: usize,
}

impl<F> ConfigFetcher<F>
where
    F: FunctionConfigSource,
{
    /// Create a fetcher. A concurrency of 0 is treated as 1.
    pub fn new(source: Arc<F>, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetch every function and build the document.
    ///
    /// Entries follow the order of `functions` whatever order the fetches
    /// complete in. The first failure aborts the remaining fetches.
    pub async fn fetch_all(
        &self,
        functions: &[ResourceDescriptor],
        events: &dyn ExportEventSink,
    ) -> SamvarsResult<OutputDocument> {
        let mut slots: Vec<Option<EnvironmentMap>> = vec![None; functions.len()];
        let mut pending = functions.iter().enumerate();
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < self.concurrency {
                let Some((index, function)) = pending.next() else {
                    break;
                };
                let source = Arc::clone(&self.source);
                let physical_id = function.physical_id.clone();
                tasks.spawn(async move {
                    let environment = source.environment(&physical_id).await;
                    (index, environment)
                });
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            let (index, environment) = joined.map_err(|e| SamvarsError::Task(e.to_string()))?;
            // Dropping `tasks` on error aborts whatever is still running
            let environment = environment?;

            let function = &functions[index];
            debug!(
                logical_id = %function.logical_id,
                physical_id = %function.physical_id,
                variables = environment.len(),
                "fetched function environment"
            );
            events.on_event(ExportEvent::FunctionFetched {
                index,
                logical_id: function.logical_id.clone(),
                variable_count: environment.len(),
            });
            slots[index] = Some(environment);
        }

        Ok(functions
            .iter()
            .zip(slots)
            .map(|(function, environment)| {
                (function.logical_id.clone(), environment.unwrap_or_default())
            })
            .collect())
    }
}
