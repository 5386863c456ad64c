//! CloudFormation adapter for the stack resource port.

use aws_config::SdkConfig;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::Client;
use tracing::trace;

use crate::domain::entities::StackResource;
use crate::domain::ports::{ControlPlaneError, ResourcePage, StackResourceSource};
use crate::domain::value_objects::StackName;

const LIST_STACK_RESOURCES: &str = "ListStackResources";

/// Lists stack resources through `ListStackResources`.
#[derive(Debug, Clone)]
pub struct CloudFormationResources {
    client: Client,
}

impl CloudFormationResources {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl StackResourceSource for CloudFormationResources {
    async fn list_resources(
        &self,
        stack: &StackName,
        next_token: Option<String>,
    ) -> Result<ResourcePage, ControlPlaneError> {
        trace!(stack = %stack, token = ?next_token, "ListStackResources");
        let output = self
            .client
            .list_stack_resources()
            .stack_name(stack.as_str())
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|err| {
                if is_stack_not_found(err.code(), err.message()) {
                    ControlPlaneError::StackNotFound {
                        stack: stack.to_string(),
                    }
                } else {
                    ControlPlaneError::Request {
                        operation: LIST_STACK_RESOURCES,
                        message: DisplayErrorContext(&err).to_string(),
                    }
                }
            })?;

        let resources = output
            .stack_resource_summaries()
            .iter()
            .map(|summary| {
                StackResource::new(
                    summary.logical_resource_id().unwrap_or_default(),
                    summary.physical_resource_id().map(str::to_string),
                    summary.resource_type().unwrap_or_default(),
                )
            })
            .collect();

        Ok(ResourcePage {
            resources,
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// CloudFormation reports unknown stacks as a generic `ValidationError`;
/// only the message tells them apart from other validation failures.
pub(crate) fn is_stack_not_found(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some("ValidationError") && message.is_some_and(|m| m.contains("does not exist"))
}
