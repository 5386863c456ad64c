//! Stack Resolver
//!
//! Picks the stack to export: explicit flag, then the local deploy config,
//! then an interactive prompt.

use std::path::Path;

use tracing::debug;

use crate::domain::ports::{ConfigLookup, ExportEvent, ExportEventSink, Prompter, StackConfigSource};
use crate::domain::value_objects::{StackName, StackNameSource};
use crate::error::SamvarsResult;

/// Question shown when neither the flag nor the config supplies a name
pub const STACK_NAME_PROMPT: &str = "Enter the CloudFormation stack name";

/// Resolves a stack name through the precedence chain.
pub struct StackResolver<C, P>
where
    C: StackConfigSource,
    P: Prompter,
{
    config: C,
    prompter: P,
}

impl<C, P> StackResolver<C, P>
where
    C: StackConfigSource,
    P: Prompter,
{
    pub fn new(config: C, prompter: P) -> Self {
        Self { config, prompter }
    }

    /// Resolve the stack name.
    ///
    /// A lower-precedence channel is consulted only when every higher one came
    /// up empty, so the prompt never blocks when a name is already known.
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        config_path: &Path,
        config_env: &str,
        events: &dyn ExportEventSink,
    ) -> SamvarsResult<(StackName, StackNameSource)> {
        let (stack, source) = match explicit {
            Some(raw) => (StackName::new(raw)?, StackNameSource::Flag),
            None => match self.from_config(config_path, config_env, events)? {
                Some(stack) => (stack, StackNameSource::ConfigFile),
                None => {
                    let answer = self.prompter.ask(STACK_NAME_PROMPT)?;
                    (StackName::new(&answer)?, StackNameSource::Prompt)
                }
            },
        };

        debug!(stack = %stack, source = %source, "resolved stack name");
        events.on_event(ExportEvent::StackResolved {
            stack: stack.to_string(),
            source,
        });
        Ok((stack, source))
    }

    fn from_config(
        &self,
        config_path: &Path,
        config_env: &str,
        events: &dyn ExportEventSink,
    ) -> SamvarsResult<Option<StackName>> {
        match self.config.stack_name(config_path, config_env)? {
            // A blank value in the config is as good as none
            ConfigLookup::Found(raw) => Ok(StackName::new(&raw).ok()),
            ConfigLookup::KeyMissing => {
                debug!(
                    path = %config_path.display(),
                    env = config_env,
                    "config has no deploy.parameters.stack_name"
                );
                Ok(None)
            }
            ConfigLookup::FileMissing => {
                events.on_event(ExportEvent::ConfigMissing {
                    path: config_path.to_path_buf(),
                });
                Ok(None)
            }
        }
    }
}
