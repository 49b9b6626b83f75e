use std::process::{Command, Output};

use serde_json::Value;

fn run_arranger(args: &[&str]) -> Output {
    let bin_path = std::env::var("CARGO_BIN_EXE_arranger")
        .unwrap_or_else(|_| "target/debug/arranger".to_string());

    Command::new(bin_path)
        .args(args)
        .args(["--config", "/dev/null"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run arranger")
}

#[test]
fn arranges_problems_from_arguments() {
    let output = run_arranger(&["-a", "32 + 698", "3801 - 2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(
        stdout,
        "   32      3801\n+ 698    -    2\n-----    ------\n  730      3799\n"
    );
}

#[test]
fn rejected_batch_exits_with_failure() {
    let output = run_arranger(&["1 + 1", "1 + 1", "1 + 1", "1 + 1", "1 + 1", "1 + 1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert_eq!(stderr.trim_end(), "Error: Too many problems.");
}

#[test]
fn json_report() {
    let output = run_arranger(&["--format", "json", "3a + 5"]);

    assert!(!output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["ok"], Value::Bool(false));
    assert_eq!(report["error"]["kind"], "non_digit_number");
    assert_eq!(report["diagnostics"][0]["text"], "3a");
}
