//! samvars CLI - export Lambda environments of a CloudFormation stack
//!
//! Usage: samvars [--stack-name NAME] [--output PATH] [--region REGION] ...
//!
//! Exit codes:
//!   0  document written
//!   1  any other failure
//!   2  invalid arguments
//!   3  stack does not exist

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use samvars::domain::ports::ExportEventSink;
use samvars::infrastructure::load_sdk_config;
use samvars::presentation::{factory, Cli};
use samvars::ExportOutcome;

/// Exit status when the named stack does not exist
const STACK_NOT_FOUND_EXIT_CODE: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let events = factory::create_event_sink(cli.json, cli.verbose);
    match run(&cli, events.as_ref()) {
        Ok(ExportOutcome::Written(_)) => ExitCode::SUCCESS,
        Ok(ExportOutcome::StackNotFound { .. }) => ExitCode::from(STACK_NOT_FOUND_EXIT_CODE),
        Err(err) => {
            print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, events: &dyn ExportEventSink) -> Result<ExportOutcome> {
    let options = cli.export_options();

    // Resolution may prompt on stdin, so it runs before the runtime exists.
    let resolver = factory::create_stack_resolver();
    let (stack, _source) = resolver.resolve(
        options.stack_name.as_deref(),
        &options.config_path,
        &options.config_env,
        events,
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let outcome = runtime.block_on(async {
        let sdk_config = load_sdk_config(&cli.aws_settings()).await;
        let use_case = factory::create_export_use_case(&sdk_config);
        use_case.execute(&stack, &options, events).await
    })?;

    debug!(stack = %outcome.stack(), written = outcome.is_written(), "export finished");
    Ok(outcome)
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "warn",
        1 => "warn,samvars=info",
        2 => "info,samvars=debug",
        _ => "debug,samvars=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    eprintln!("[ERROR] {:#}", err);
}
