//! samvars - Lambda environment exporter
//!
//! samvars collects the environment variables of every Lambda function in a
//! CloudFormation stack and writes them to a single JSON document, keyed by
//! logical resource id, ready for `sam local invoke --env-vars`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ExportOptions, ExportOutcome, ExportSummary, ExportUseCase};
pub use domain::entities::{EnvironmentMap, OutputDocument, ResourceDescriptor, StackResource};
pub use domain::value_objects::{StackName, StackNameSource};
pub use error::{SamvarsError, SamvarsResult};
