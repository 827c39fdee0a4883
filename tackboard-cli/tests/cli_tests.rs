//! Binary-level tests for the `tackboard` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the user's home config and environment
fn tackboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tackboard").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TACKBOARD_WEEK_START")
        .env_remove("TACKBOARD_ACTOR")
        .env_remove("TACKBOARD_OUTPUT");
    cmd
}

#[test]
fn test_run_batch() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("batch.json"),
        r#"[
            {"op": "add board", "title": "Board"},
            {"op": "add list", "board_id": 1, "title": "L1"},
            {"op": "add list", "board_id": 1, "title": "L2"},
            {"list_id": 1, "title": "A"},
            {"list_id": 1, "title": "B"},
            {"move": "card", "id": 2, "list_id": 2, "position": 0},
            {"op": "get board", "id": 1}
        ]"#,
    )
    .unwrap();

    let output = tackboard(&dir).args(["run", "batch.json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["data"]["lists"][1]["cards"][0]["title"], "B");
    assert_eq!(last["data"]["lists"][0]["cards"][0]["position"], 0);
}

#[test]
fn test_run_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("batch.json"), r#"{"op": "get card", "id": 4}"#).unwrap();

    tackboard(&dir)
        .args(["run", "batch.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("card not found: 4"));
}

#[test]
fn test_run_yaml_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("batch.yaml"),
        "- op: add todolist\n  title: Errands\n- todolist_id: 1\n  title: bank\n",
    )
    .unwrap();

    tackboard(&dir)
        .args(["run", "batch.yaml", "--output", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("op: add todo"))
        .stdout(predicate::str::contains("title: bank"));
}

#[test]
fn test_run_missing_file() {
    let dir = TempDir::new().unwrap();
    tackboard(&dir)
        .args(["run", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_project_config_week_start() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tackboard.toml"), "week_start = \"sunday\"\n").unwrap();
    fs::write(
        dir.path().join("batch.json"),
        r#"[
            {"date": "2024-03-10", "minutes": 30, "piece": "Scales"},
            {"op": "list weeks"}
        ]"#,
    )
    .unwrap();

    tackboard(&dir)
        .args(["run", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""starts_on":"2024-03-10""#));
}

#[test]
fn test_env_overrides_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tackboard.toml"), "week_start = \"sunday\"\n").unwrap();
    fs::write(
        dir.path().join("batch.json"),
        r#"{"op": "log session", "date": "2024-03-10", "minutes": 30, "piece": "Scales"}"#,
    )
    .unwrap();

    tackboard(&dir)
        .env("TACKBOARD_WEEK_START", "monday")
        .args(["run", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""starts_on":"2024-03-04""#));
}

#[test]
fn test_actor_flag_reaches_activity() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"op": "add board", "title": "B"}, {"op": "list activity"}]"#,
    )
    .unwrap();

    tackboard(&dir)
        .args(["--actor", "alice", "run", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""actor":"alice""#));
}

#[test]
fn test_shell() {
    let dir = TempDir::new().unwrap();
    let output = tackboard(&dir)
        .arg("shell")
        .write_stdin("{\"op\": \"add board\", \"title\": \"B\"}\n{\"op\": \"list boards\"}\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains(r#""count":1"#));
}

#[test]
fn test_ops_table() {
    let dir = TempDir::new().unwrap();
    tackboard(&dir)
        .arg("ops")
        .assert()
        .success()
        .stdout(predicate::str::contains("move card"))
        .stdout(predicate::str::contains("log session"));
}

#[test]
fn test_ops_json() {
    let dir = TempDir::new().unwrap();
    tackboard(&dir)
        .args(["ops", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""op": "delete week""#));
}

#[test]
fn test_debug_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("batch.json"), r#"{"op": "list boards"}"#).unwrap();

    tackboard(&dir)
        .args(["--debug", "run", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("parsed operation"));
}
