//! Integration tests for the commands that never contact Timeplus.

mod common;

use common::{json_file, timeplus_cmd};
use predicates::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_resources_without_credentials_omits_alert() {
    let output = timeplus_cmd().arg("resources").assert().success();
    let listing: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    let resources = listing["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 8);
    assert!(resources.contains(&json!("timeplus_stream")));
    assert!(!resources.contains(&json!("timeplus_alert")));
}

#[test]
fn test_resources_with_api_key_includes_alert() {
    let mut cmd = timeplus_cmd();
    cmd.env("TIMEPLUS_API_KEY", "k")
        .env("TIMEPLUS_WORKSPACE", "ws1")
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("timeplus_alert"));
}

#[test]
fn test_schema_prints_column_block() {
    timeplus_cmd()
        .args(["schema", "timeplus_stream"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"column\""))
        .stdout(predicate::str::contains("requires_replace"));
}

#[test]
fn test_schema_for_data_source() {
    timeplus_cmd()
        .args(["schema", "stream", "--data-source"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"columns\""));
}

#[test]
fn test_unknown_type_exits_with_validation_code() {
    timeplus_cmd()
        .args(["schema", "timeplus_table"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown resource or data source type"));
}

#[test]
fn test_validate_rejects_stream_without_columns() {
    let config = json_file(&json!({"name": "orders"}));
    timeplus_cmd()
        .args(["validate", "stream", "--config"])
        .arg(config.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("No Columns"));
}

#[test]
fn test_validate_accepts_view() {
    let config = json_file(&json!({"name": "v", "query": "select 1"}));
    timeplus_cmd()
        .args(["validate", "view", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_plan_create_from_stdin() {
    let config = json!({"name": "v", "query": "select 1"}).to_string();
    let output = timeplus_cmd()
        .args(["plan", "view", "--config", "-"])
        .write_stdin(config)
        .assert()
        .success();
    let change: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(change["action"], "create");
    assert_eq!(change["planned_state"]["name"], "v");
}

#[test]
fn test_plan_sink_type_change_requires_replace() {
    let state = json_file(&json!({
        "id": "s-1", "name": "out", "description": null,
        "type": "kafka", "sql": "select 1", "properties": "{}"
    }));
    let config = json_file(&json!({
        "name": "out", "type": "slack", "sql": "select 1", "properties": "{}"
    }));
    timeplus_cmd()
        .args(["plan", "sink", "--config"])
        .arg(config.path())
        .arg("--state")
        .arg(state.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"replace\""));
}

#[test]
fn test_create_without_credentials_fails() {
    let plan = json_file(&json!({"name": "v", "query": "select 1"}));
    timeplus_cmd()
        .args(["create", "view", "--plan"])
        .arg(plan.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid provider configuration"));
}

#[test]
fn test_conflicting_auth_is_rejected() {
    let plan = json_file(&json!({"name": "v", "query": "select 1"}));
    timeplus_cmd()
        .env("TIMEPLUS_API_KEY", "k")
        .env("TIMEPLUS_USERNAME", "proton")
        .env("TIMEPLUS_PASSWORD", "pw")
        .args(["create", "view", "--plan"])
        .arg(plan.path())
        .assert()
        .code(5);
}

#[test]
fn test_missing_file_is_general_error() {
    timeplus_cmd()
        .args(["validate", "view", "--config", "/nonexistent/config.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}
