//! Error types for samvars
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ControlPlaneError, FsError};

/// Result type alias for samvars operations
pub type SamvarsResult<T> = Result<T, SamvarsError>;

/// Main error type for samvars operations
#[derive(Error, Debug)]
pub enum SamvarsError {
    /// No stack name could be obtained from any source
    #[error("no CloudFormation stack name provided")]
    EmptyStackName,

    /// The samconfig file exists but is not valid TOML
    #[error("failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The interactive prompt could not be shown or read
    #[error("failed to read stack name: {0}")]
    Prompt(String),

    /// A CloudFormation or Lambda call failed
    #[error(transparent)]
    ControlPlane(#[from] ControlPlaneError),

    /// The output document could not be serialized
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the output document failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A background fetch task panicked or was cancelled
    #[error("fetch task failed: {0}")]
    Task(String),
}
