//! Export Use Case
//!
//! Orchestrates one export run:
//! - Listing the stack's Lambda functions
//! - Fetching each function's environment
//! - Writing the aggregated document

mod options;
mod result;
mod use_case;


pub use options::{ExportOptions, DEFAULT_CONFIG_ENV, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE};
pub use result::{ExportOutcome, ExportSummary};
pub use use_case::ExportUseCase;
