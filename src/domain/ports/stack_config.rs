//! Stack config port - abstracts reading the default stack name from a
//! local deploy configuration file (`samconfig.toml`).

use std::path::Path;

use crate::error::SamvarsResult;

/// Outcome of looking up a stack name in a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLookup {
    /// The key was present
    Found(String),
    /// The file exists but does not define the key
    KeyMissing,
    /// The file does not exist
    FileMissing,
}

/// Source of the configured default stack name.
pub trait StackConfigSource {
    /// Look up `<config_env>.deploy.parameters.stack_name` in `path`.
    ///
    /// A file that exists but cannot be parsed is an error.
    fn stack_name(&self, path: &Path, config_env: &str) -> SamvarsResult<ConfigLookup>;
}
