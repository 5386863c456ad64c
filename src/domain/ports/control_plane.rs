//! Control Plane Ports
//!
//! Read-only views of the two AWS control planes the export needs:
//! stack resource listing (CloudFormation) and function configuration
//! (Lambda). Adapters live in `infrastructure::aws`; tests substitute
//! in-memory fakes.

use std::future::Future;

use thiserror::Error;

use crate::domain::entities::{EnvironmentMap, StackResource};
use crate::domain::value_objects::StackName;

/// Errors reported by a control plane adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlPlaneError {
    /// CloudFormation rejected the stack name as unknown
    #[error("CloudFormation stack '{stack}' does not exist")]
    StackNotFound { stack: String },

    /// Any other failed call (permissions, throttling, network, deleted function)
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
}

/// One page of a stack resource listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePage {
    pub resources: Vec<StackResource>,
    /// Token for the next page; `None` on the last page
    pub next_token: Option<String>,
}

impl ResourcePage {
    pub fn last(resources: Vec<StackResource>) -> Self {
        Self {
            resources,
            next_token: None,
        }
    }
}

/// Lists the resources of a stack one page at a time.
pub trait StackResourceSource: Send + Sync {
    /// Fetch the page starting at `next_token` (`None` for the first page).
    fn list_resources(
        &self,
        stack: &StackName,
        next_token: Option<String>,
    ) -> impl Future<Output = Result<ResourcePage, ControlPlaneError>> + Send;
}

/// Reads the current configuration of a single function.
pub trait FunctionConfigSource: Send + Sync + 'static {
    /// Environment variables of `function_name` (physical id).
    /// Functions without an environment block yield an empty map.
    fn environment(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<EnvironmentMap, ControlPlaneError>> + Send;
}
