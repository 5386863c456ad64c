//! `samconfig.toml` reader for the stack config port.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use toml::{Table, Value};
use tracing::debug;

use crate::domain::ports::{ConfigLookup, StackConfigSource};
use crate::error::{SamvarsError, SamvarsResult};

/// Reads `<env>.deploy.parameters.stack_name` from a SAM CLI config file.
///
/// Only that key path is inspected; the rest of the document is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlStackConfig;

impl TomlStackConfig {
    pub fn new() -> Self {
        Self
    }
}

impl StackConfigSource for TomlStackConfig {
    fn stack_name(&self, path: &Path, config_env: &str) -> SamvarsResult<ConfigLookup> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found");
                return Ok(ConfigLookup::FileMissing);
            }
            Err(err) => return Err(err.into()),
        };

        let document: Table = toml::from_str(&content).map_err(|e| SamvarsError::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        Ok(lookup_stack_name(&document, config_env))
    }
}

fn lookup_stack_name(document: &Table, config_env: &str) -> ConfigLookup {
    let stack_name = [config_env, "deploy", "parameters"]
        .iter()
        .try_fold(document, |table, key| table.get(*key).and_then(Value::as_table))
        .and_then(|parameters| parameters.get("stack_name"))
        .and_then(Value::as_str);

    match stack_name {
        Some(name) => ConfigLookup::Found(name.to_string()),
        None => ConfigLookup::KeyMissing,
    }
}
