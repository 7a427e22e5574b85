//! CLI integration tests

use std::process::{Command, Output};

/// Run the CLI with a clean environment: no config file, no server, no execution
fn assist(args: &[&str]) -> Output {
    let home = std::env::temp_dir().join("assist-cli-tests-home");
    Command::new("cargo")
        .args(["run", "-q", "-p", "assist-cli", "--"])
        .args(args)
        .env("HOME", &home)
        .env("NO_COLOR", "1")
        .env_remove("ASSIST_SERVER_URL")
        .env_remove("ALLOW_KUBECTL")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = assist(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Observability and cloud automation assistant"),
        "Should show app description"
    );
    assert!(stdout.contains("grafana"), "Should show grafana command");
    assert!(stdout.contains("aws"), "Should show aws command");
    assert!(
        stdout.contains("aws-workflows"),
        "Should show aws-workflows command"
    );
    assert!(stdout.contains("k8s"), "Should show k8s command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = assist(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("assist"), "Should show binary name");
}

/// Test format option
#[test]
fn test_format_option() {
    let output = assist(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test k8s subcommand help
#[test]
fn test_k8s_help() {
    let output = assist(&["k8s", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "k8s help should succeed");
    assert!(stdout.contains("--run"), "Should show run option");
    assert!(stdout.contains("--server"), "Should show server option");
    assert!(stdout.contains("ASSIST_SERVER_URL"), "Should show env var");
}

/// Test local translation output
#[test]
fn test_k8s_translates_locally() {
    let output = assist(&["k8s", "show pods in namespace payments"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Translation should succeed");
    assert!(stdout.contains("show-pods"), "Should show intent");
    assert!(
        stdout.contains("kubectl get pods -n payments -o wide"),
        "Should show suggested command"
    );
}

/// Test JSON translation output
#[test]
fn test_k8s_json_output() {
    let output = assist(&[
        "--format",
        "json",
        "k8s",
        "scale deployment web to 3 replicas",
    ]);
    assert!(output.status.success(), "Translation should succeed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["parsed"]["intent"], "scale-deployment");
    assert_eq!(
        json["parsed"]["kubectl"][0],
        "kubectl scale deployment/web --replicas=3 -n default"
    );
}

/// Test that running is refused without ALLOW_KUBECTL
#[test]
fn test_k8s_run_disabled() {
    let output = assist(&["k8s", "show pods", "--run"]);

    assert!(!output.status.success(), "Run should fail when disabled");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Execution disabled"),
        "Should explain how to enable execution"
    );
}

/// Test Grafana walkthrough JSON summary
#[test]
fn test_grafana_json_summary() {
    let output = assist(&["--format", "json", "grafana"]);
    assert!(output.status.success(), "Grafana walkthrough should succeed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["summary"]["dashboards"], 2);
    assert_eq!(json["summary"]["alerts"], 1);
    assert_eq!(json["summary"]["slos"], 1);
    assert_eq!(json["summary"]["queries"], 1);
    assert_eq!(json["summary"]["conversations"], 6);
    assert_eq!(json["records"]["alerts"][0]["severity"], "critical");
}

/// Test AWS walkthrough narration
#[test]
fn test_aws_walkthrough() {
    let output = assist(&["aws"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "AWS walkthrough should succeed");
    assert!(stdout.contains("mcp-demo-bucket-2026"), "Should show bucket");
    assert!(
        stdout.contains("data-processor-function"),
        "Should show Lambda function"
    );
    assert!(stdout.contains("AUTOMATION SUMMARY"), "Should show summary");
}

/// Test AWS walkthrough JSON summary
#[test]
fn test_aws_json_summary() {
    let output = assist(&["--format", "json", "aws"]);
    assert!(output.status.success(), "AWS walkthrough should succeed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["summary"]["total_resources"], 5);
    assert_eq!(json["summary"]["ec2_instances"], 1);
    assert_eq!(json["summary"]["s3_buckets"], 1);
    assert_eq!(json["summary"]["lambda_functions"], 1);
    assert_eq!(json["summary"]["total_operations"], 5);
}

/// Test workflow catalog JSON
#[test]
fn test_aws_workflows_json() {
    let output = assist(&["--format", "json", "aws-workflows"]);
    assert!(output.status.success(), "Workflow catalog should succeed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(4));
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = assist(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_argument() {
    let output = assist(&["k8s"]);

    assert!(!output.status.success(), "Missing argument should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}
