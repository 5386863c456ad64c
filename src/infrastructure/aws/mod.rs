//! AWS control plane adapters

mod cloudformation;
mod lambda;
mod session;

pub use cloudformation::CloudFormationResources;
pub use lambda::LambdaFunctions;
pub use session::{load_sdk_config, AwsSettings};
