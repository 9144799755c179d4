//! Logging behavior of the `louvores` binary.

use std::process::{Command, Output};

use crate::integration::support::Fixture;

const LOG_VARS: &[&str] = &[
    "LOUVORES_LOG",
    "LOUVORES_LOG_FORMAT",
    "LOUVORES_LOG_OUTPUT",
    "LOUVORES_LOG_FILE",
    "LOUVORES_LOG_MODULES",
];

fn louvores(fixture: &Fixture, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_louvores"));
    command.arg("--workspace").arg(fixture.workspace()).args(args);
    for var in LOG_VARS {
        command.env_remove(var);
    }
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().unwrap()
}

#[test]
fn cli_log_flags_beat_environment() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/a.pdf");
    let output = louvores(
        &fixture,
        &["--log-level", "debug", "--log-format", "text", "--log-output", "stdout", "validate"],
        &[("LOUVORES_LOG", "warn"), ("LOUVORES_LOG_FORMAT", "json")],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DEBUG"));
    assert!(!stdout.lines().any(|line| line.starts_with('{')));
}

#[test]
fn environment_applies_without_cli_flags() {
    let fixture = Fixture::new();
    fixture.file("Cat/001 - [V] Hino/a.pdf");
    let output = louvores(
        &fixture,
        &["validate"],
        &[
            ("LOUVORES_LOG", "info"),
            ("LOUVORES_LOG_FORMAT", "json"),
            ("LOUVORES_LOG_OUTPUT", "stdout"),
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line.starts_with('{') && line.contains("\"INFO\"")));
}

#[test]
fn config_load_failure_is_logged_and_exits_one() {
    let fixture = Fixture::new();
    let missing = fixture.workspace().join("missing.toml");
    let output = louvores(
        &fixture,
        &[
            "--config",
            missing.to_str().unwrap(),
            "--log-format",
            "json",
            "--log-output",
            "stdout",
        ],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fatal error"));
    assert!(stdout.contains("\"ERROR\""));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config file not found"));
}
