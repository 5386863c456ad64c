//! Export Options
//!
//! Configuration types for an export run.

use std::path::PathBuf;

use crate::domain::services::DEFAULT_CONCURRENCY;

/// Config file consulted for the default stack name
pub const DEFAULT_CONFIG_FILE: &str = "samconfig.toml";
/// samconfig environment table holding deploy parameters
pub const DEFAULT_CONFIG_ENV: &str = "default";
/// Where the aggregated environment document is written
pub const DEFAULT_OUTPUT_FILE: &str = "vars.json";

/// Options for the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Explicit stack name (`--stack-name`), highest precedence
    pub stack_name: Option<String>,
    /// Deploy config file, relative to the working directory
    pub config_path: PathBuf,
    /// samconfig environment table to read
    pub config_env: String,
    /// Output document path
    pub output_path: PathBuf,
    /// Maximum parallel function fetches
    pub concurrency: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            stack_name: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            config_env: DEFAULT_CONFIG_ENV.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stack_name(mut self, stack_name: Option<String>) -> Self {
        self.stack_name = stack_name;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_config_env(mut self, env: impl Into<String>) -> Self {
        self.config_env = env.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
