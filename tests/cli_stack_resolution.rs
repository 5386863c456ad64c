//! Binary-level checks for stack name resolution.
//!
//! Every case here fails before any AWS call is made, so the tests run
//! offline.

use std::fs;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_samvars"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_config_announces_and_prompts() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("samconfig.toml does not exist. Please provide the CloudFormation stack name."),
        "stdout:\n{}",
        stdout
    );
    assert!(stdout.contains("Enter the CloudFormation stack name: "));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] no CloudFormation stack name provided"));
    assert!(!dir.path().join("vars.json").exists());
}

#[test]
fn blank_stack_name_flag_is_rejected() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--stack-name", "   "]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no CloudFormation stack name provided"));
}

#[test]
fn invalid_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("samconfig.toml"), "[default.deploy\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse samconfig.toml"), "stderr:\n{}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter the CloudFormation stack name"));
}

#[test]
fn config_without_key_prompts_without_notice() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("samconfig.toml"),
        "version = 0.1\n[default.deploy.parameters]\nregion = \"us-east-1\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("does not exist"));
    assert!(stdout.contains("Enter the CloudFormation stack name: "));
}

#[test]
fn json_mode_reports_events_and_error() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--json"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .filter_map(|line| line.find('{').map(|start| &line[start..]))
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    assert!(events
        .iter()
        .any(|e| e["event"] == "config_missing" && e["path"] == "samconfig.toml"));
    let error = events
        .iter()
        .find(|e| e["event"] == "error")
        .expect("error event");
    assert_eq!(error["message"], "no CloudFormation stack name provided");
}
