//! Application Layer
//!
//! Use cases that orchestrate the export flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - enumerate, fetch, write

pub mod export;

pub use export::{
    ExportOptions, ExportOutcome, ExportSummary, ExportUseCase, DEFAULT_CONFIG_ENV,
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE,
};
