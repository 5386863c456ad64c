//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::application::{
    ExportOptions, DEFAULT_CONFIG_ENV, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE,
};
use crate::infrastructure::AwsSettings;

/// Generate environment variables for Lambda functions in a CloudFormation stack (vars.json).
#[derive(Parser, Debug)]
#[command(name = "samvars")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without --stack-name, the stack is read from samconfig.toml or asked for interactively."
)]
pub struct Cli {
    /// Specify the CloudFormation stack name
    #[arg(long, value_name = "NAME")]
    pub stack_name: Option<String>,

    /// SAM config file holding the default stack name
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Environment table in the SAM config file
    #[arg(long, value_name = "ENV", default_value = DEFAULT_CONFIG_ENV)]
    pub config_env: String,

    /// Where to write the environment document
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// AWS region (defaults to the standard region chain)
    #[arg(long)]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom AWS endpoint, e.g. http://localhost:4566 for LocalStack
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Maximum number of functions fetched in parallel
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub concurrency: u16,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new()
            .with_stack_name(self.stack_name.clone())
            .with_config_path(&self.config_file)
            .with_config_env(&self.config_env)
            .with_output_path(&self.output)
            .with_concurrency(usize::from(self.concurrency))
    }

    pub fn aws_settings(&self) -> AwsSettings {
        AwsSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
