//! Prompter port - asks the operator for a value on the controlling terminal.

use crate::error::SamvarsResult;

/// Synchronous, blocking text prompt.
pub trait Prompter {
    /// Show `message` and return the raw answer (possibly empty).
    fn ask(&self, message: &str) -> SamvarsResult<String>;
}
