//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - CloudFormation and Lambda clients
//! - `config/` - `samconfig.toml` reader
//! - `fs/` - Local file system with atomic writes
//! - `prompt/` - Terminal prompter
//! - `events/` - Text and NDJSON event sinks

pub mod aws;
pub mod config;
pub mod events;
pub mod fs;
pub mod prompt;

// Re-export for convenience
pub use aws::{load_sdk_config, AwsSettings, CloudFormationResources, LambdaFunctions};
pub use config::TomlStackConfig;
pub use events::{JsonEventSink, TextEventSink};
pub use fs::LocalFs;
pub use prompt::{LinePrompter, TerminalPrompter};
