//! Lambda adapter for the function configuration port.

use aws_config::SdkConfig;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::operation::get_function_configuration::GetFunctionConfigurationOutput;
use aws_sdk_lambda::Client;
use tracing::trace;

use crate::domain::entities::EnvironmentMap;
use crate::domain::ports::{ControlPlaneError, FunctionConfigSource};

/// Reads function environments through `GetFunctionConfiguration`.
#[derive(Debug, Clone)]
pub struct LambdaFunctions {
    client: Client,
}

impl LambdaFunctions {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl FunctionConfigSource for LambdaFunctions {
    async fn environment(&self, function_name: &str) -> Result<EnvironmentMap, ControlPlaneError> {
        trace!(function = function_name, "GetFunctionConfiguration");
        let output = self
            .client
            .get_function_configuration()
            .function_name(function_name)
            .send()
            .await
            .map_err(|err| ControlPlaneError::Request {
                operation: "GetFunctionConfiguration",
                message: format!("{function_name}: {}", DisplayErrorContext(&err)),
            })?;

        Ok(environment_of(&output))
    }
}

/// `Environment.Variables`, or an empty map when either level is absent.
fn environment_of(output: &GetFunctionConfigurationOutput) -> EnvironmentMap {
    output
        .environment()
        .and_then(|env| env.variables())
        .map(|vars| {
            vars.iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}
