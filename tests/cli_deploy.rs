//! Integration tests for the deploy flow against fake `scp`/`ssh` tools.
//!
//! The fakes are injected via PATH and log their arguments, so no network
//! access happens.

#![cfg(unix)]

mod common;

use common::*;

fn copy_line(source: &str, host: &str) -> String {
    format!("scp {} {}:{}", source, host, REMOTE_DIR)
}

fn build_line(host: &str) -> String {
    format!("ssh {} cd {};make clean;make", host, REMOTE_DIR)
}

#[test]
fn single_selector_copies_then_builds() {
    let env = TestEnv::builder().build();
    let result = env.run(&["6"]);

    assert!(result.success, "Deploy failed:\n{}", result.combined_output());
    assert_eq!(
        env.tool_calls(),
        vec![copy_line(ROC6_SOURCE, ROC6_HOST), build_line(ROC6_HOST)]
    );
}

#[test]
fn commands_are_printed_before_they_run() {
    let env = TestEnv::builder().build();
    let result = env.run(&["6"]);

    let stdout = &result.stdout;
    let separator = stdout.find("------------- ROC6").expect("missing separator");
    let copy = stdout
        .find(&format!("scp {} {}:{}", ROC6_SOURCE, ROC6_HOST, REMOTE_DIR))
        .expect("missing copy command");
    let copy_output = stdout.find("fake scp ran").expect("missing scp output");
    let build = stdout
        .find(&format!(
            "ssh {} \"cd {};make clean;make\"",
            ROC6_HOST, REMOTE_DIR
        ))
        .expect("missing build command");

    assert!(separator < copy);
    assert!(copy < copy_output);
    assert!(copy_output < build);
}

#[test]
fn selection_is_printed() {
    let env = TestEnv::builder().build();
    let result = env.run(&["6,8"]);

    assert!(
        result.stdout.contains("Selected: [ROC6, ROC8]"),
        "Expected selector echo in output:\n{}",
        result.stdout
    );
}

#[test]
fn all_deploys_every_controller() {
    let env = TestEnv::builder().build();
    let result = env.run(&["all"]);

    assert!(result.success, "Deploy failed:\n{}", result.combined_output());
    assert_eq!(env.tool_calls().len(), INVENTORY_SIZE * 2);
}

#[test]
fn inventory_order_wins_over_selector_order() {
    let env = TestEnv::builder().build();
    let result = env.run(&["18,6"]);

    assert!(result.success, "Deploy failed:\n{}", result.combined_output());
    assert_eq!(
        env.tool_calls(),
        vec![
            copy_line(ROC6_SOURCE, ROC6_HOST),
            build_line(ROC6_HOST),
            copy_line(ROC18_SOURCE, ROC18_HOST),
            build_line(ROC18_HOST),
        ]
    );
}

#[test]
fn unknown_selector_is_silently_ignored() {
    let env = TestEnv::builder().build();
    let result = env.run(&["99"]);

    assert!(result.success, "Deploy failed:\n{}", result.combined_output());
    assert!(env.tool_calls().is_empty());
    assert!(!result.stderr.contains("ROC99"));
}

#[test]
fn unknown_selector_is_reported_when_verbose() {
    let env = TestEnv::builder().build();
    let result = env.run(&["-v", "6,99"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("No controller named ROC99"),
        "Expected unmatched warning:\n{}",
        result.stderr
    );
    assert_eq!(env.tool_calls().len(), 2);
}

#[test]
fn failing_copy_does_not_stop_build_or_next_controller() {
    let env = TestEnv::builder().scp_exit(1).build();
    let result = env.run(&["6,8"]);

    assert!(
        result.success,
        "Continue-on-failure run should exit 0:\n{}",
        result.combined_output()
    );
    let calls = env.tool_calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[1], build_line(ROC6_HOST));
    assert_eq!(calls[3], build_line(ROC8_HOST));
    assert!(result.stderr.contains("copy: exit code 1"));
}

#[test]
fn fail_fast_stops_at_first_failed_copy() {
    let env = TestEnv::builder().scp_exit(1).build();
    let result = env.run(&["--fail-fast", "6,8"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_eq!(env.tool_calls(), vec![copy_line(ROC6_SOURCE, ROC6_HOST)]);
    assert!(
        result.stderr.contains("copy step for ROC6 failed"),
        "Expected failure message:\n{}",
        result.stderr
    );
}

#[test]
fn fail_fast_stops_at_first_failed_build() {
    let env = TestEnv::builder().ssh_exit(2).build();
    let result = env.run(&["--fail-fast", "6,8"]);

    assert!(!result.success);
    assert_eq!(env.tool_calls().len(), 2);
    assert!(result.stderr.contains("build step for ROC6 failed: exit code 2"));
}

#[test]
fn dry_run_prints_commands_without_running_them() {
    let env = TestEnv::builder().build();
    let result = env.run(&["--dry-run", "6"]);

    assert!(result.success, "Dry run failed:\n{}", result.combined_output());
    assert!(env.tool_calls().is_empty());
    assert!(result.stdout.contains("Mode: Dry run"));
    assert!(result
        .stdout
        .contains(&format!("scp {} {}:{}", ROC6_SOURCE, ROC6_HOST, REMOTE_DIR)));
}

#[test]
fn missing_selector_is_a_usage_error() {
    let env = TestEnv::builder().build();
    let result = env.run(&[]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("Usage"));
    assert!(env.tool_calls().is_empty());
}

#[test]
fn json_mode_emits_ndjson_on_stdout() {
    let env = TestEnv::builder().build();
    let result = env.run(&["--json", "6"]);

    assert!(result.success, "Deploy failed:\n{}", result.combined_output());

    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("stdout must be pure NDJSON"))
        .collect();

    assert_eq!(events.first().unwrap()["event"], "selector");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["status"], "success");
    assert!(result.stderr.contains("fake scp ran"));
}
