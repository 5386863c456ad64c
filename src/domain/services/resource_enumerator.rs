//! Resource Enumerator
//!
//! Walks every page of a stack's resource listing and keeps the Lambda
//! functions, in the order the control plane returned them.

use tracing::{debug, warn};

use crate::domain::entities::ResourceDescriptor;
use crate::domain::ports::{ControlPlaneError, StackResourceSource};
use crate::domain::value_objects::StackName;

/// Lambda functions found in a stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    pub functions: Vec<ResourceDescriptor>,
    /// Number of listing pages consumed
    pub page_count: usize,
    /// Resources of any type seen across all pages
    pub resource_count: usize,
}

/// List every Lambda function in `stack`, following page tokens to the end.
pub async fn enumerate_functions<S>(
    source: &S,
    stack: &StackName,
) -> Result<Enumeration, ControlPlaneError>
where
    S: StackResourceSource,
{
    let mut enumeration = Enumeration::default();
    let mut next_token: Option<String> = None;

    loop {
        let page = source.list_resources(stack, next_token.take()).await?;
        enumeration.page_count += 1;
        enumeration.resource_count += page.resources.len();

        for resource in &page.resources {
            match resource.as_function() {
                Some(function) => enumeration.functions.push(function),
                None if resource.resource_type.is_function() => warn!(
                    logical_id = %resource.logical_id,
                    "skipping Lambda function without a physical id"
                ),
                None => {}
            }
        }

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    debug!(
        stack = %stack,
        pages = enumeration.page_count,
        resources = enumeration.resource_count,
        functions = enumeration.functions.len(),
        "enumerated stack resources"
    );
    Ok(enumeration)
}
