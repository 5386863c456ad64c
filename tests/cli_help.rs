use std::process::Command;

#[test]
fn test_help_lists_stack_flags() {
    let bin = env!("CARGO_BIN_EXE_samvars");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--stack-name", "--output", "--region", "--concurrency", "--json"] {
        assert!(
            stdout.contains(flag),
            "help output should mention {flag}; got:\n{}",
            stdout
        );
    }
    assert!(stdout.contains("samconfig.toml"));
}

#[test]
fn test_version_prints_package_version() {
    let bin = env!("CARGO_BIN_EXE_samvars");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_samvars");

    let output = Command::new(bin).arg("--no-such-flag").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_zero_concurrency_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_samvars");

    let output = Command::new(bin)
        .args(["--concurrency", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
