//! Stack Name Value Object
//!
//! A trimmed, non-empty CloudFormation stack identifier.

use std::fmt;

use crate::error::{SamvarsError, SamvarsResult};

/// CloudFormation stack name or stack id.
///
/// Only non-emptiness is checked here. Whether the stack exists is
/// decided by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackName(String);

impl StackName {
    /// Create a stack name, trimming surrounding whitespace.
    pub fn new(raw: &str) -> SamvarsResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SamvarsError::EmptyStackName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StackName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where a resolved stack name came from, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackNameSource {
    /// `--stack-name`
    Flag,
    /// The local deploy config file
    ConfigFile,
    /// Typed by the operator
    Prompt,
}

impl StackNameSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StackNameSource::Flag => "flag",
            StackNameSource::ConfigFile => "config",
            StackNameSource::Prompt => "prompt",
        }
    }
}

impl fmt::Display for StackNameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StackName {
    type Error = SamvarsError;

    fn try_from(value: String) -> SamvarsResult<Self> {
        Self::new(&value)
    }
}
