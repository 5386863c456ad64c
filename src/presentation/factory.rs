//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use aws_config::SdkConfig;

use crate::application::ExportUseCase;
use crate::domain::ports::ExportEventSink;
use crate::domain::services::StackResolver;
use crate::infrastructure::{
    CloudFormationResources, JsonEventSink, LambdaFunctions, LocalFs, TerminalPrompter,
    TextEventSink, TomlStackConfig,
};

/// Type alias for the concrete ExportUseCase with all dependencies
pub type ConcreteExportUseCase = ExportUseCase<CloudFormationResources, LambdaFunctions, LocalFs>;

/// Type alias for the concrete StackResolver
pub type ConcreteStackResolver = StackResolver<TomlStackConfig, TerminalPrompter>;

/// Create a stack resolver reading `samconfig.toml` and prompting on the terminal
pub fn create_stack_resolver() -> ConcreteStackResolver {
    StackResolver::new(TomlStackConfig::new(), TerminalPrompter::new())
}

/// Create an export use case bound to one AWS session
///
/// Both clients share `config`, so they agree on region and credentials.
pub fn create_export_use_case(config: &SdkConfig) -> ConcreteExportUseCase {
    ExportUseCase::new(
        CloudFormationResources::new(config),
        LambdaFunctions::new(config),
        LocalFs::new(),
    )
}

/// Create the event sink for the chosen output mode
pub fn create_event_sink(json: bool, verbose: u8) -> Box<dyn ExportEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(TextEventSink::stdout(verbose))
    }
}
