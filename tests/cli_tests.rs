//! Integration tests for the taskhost CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn taskhost_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskhost").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_flow(dir: &TempDir, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    taskhost_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Runs build tasks from Lua scripts"));
}

#[test]
fn test_run_successful_flow_logs_messages() {
    let dir = TempDir::new().unwrap();
    let flow = write_flow(
        &dir,
        "ok.lua",
        r#"
        return {
          main = function(args)
            run_task(tasks.message{ text = "starting" })
            run_task(tasks.warning{ text = "careful" })
            return true
          end
        }
        "#,
    );

    taskhost_cmd(&dir)
        .arg("run")
        .arg(&flow)
        .assert()
        .success()
        .stdout(predicate::str::contains("starting"))
        .stdout(predicate::str::contains("careful"));
}

#[test]
fn test_run_failing_task_exits_with_error_text() {
    let dir = TempDir::new().unwrap();
    let flow = write_flow(
        &dir,
        "fail.lua",
        r#"
        return {
          main = function()
            run_task(tasks.error{ text = "disk full" })
            return true
          end
        }
        "#,
    );

    taskhost_cmd(&dir)
        .arg("run")
        .arg(&flow)
        .assert()
        .failure()
        .stderr(predicate::str::contains("disk full"));
}

#[test]
fn test_main_returning_false_fails() {
    let dir = TempDir::new().unwrap();
    let flow = write_flow(&dir, "false.lua", "return { main = function() return false end }");

    taskhost_cmd(&dir)
        .arg("run")
        .arg(&flow)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workflow returned false"));
}

#[test]
fn test_script_args_are_passed_to_main() {
    let dir = TempDir::new().unwrap();
    let flow = write_flow(
        &dir,
        "args.lua",
        r#"
        return {
          main = function(args)
            run_task(tasks.message{ text = "got " .. args[3] })
            return true
          end
        }
        "#,
    );

    taskhost_cmd(&dir)
        .arg("run")
        .arg(&flow)
        .arg("banana")
        .assert()
        .success()
        .stdout(predicate::str::contains("got banana"));
}

#[test]
fn test_missing_flow_file() {
    let dir = TempDir::new().unwrap();
    taskhost_cmd(&dir)
        .args(["run", "nope.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workflow file not found"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("taskhost.toml"), "[exec\n").unwrap();
    let flow = write_flow(&dir, "ok.lua", "return { main = function() return true end }");

    taskhost_cmd(&dir)
        .arg("run")
        .arg(&flow)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_init_creates_workspace_without_overwriting() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("taskhost.toml"), "[log]\nfilter = \"warn\"\n").unwrap();

    taskhost_cmd(&dir).arg("init").assert().success();

    assert!(dir.path().join("flows").is_dir());
    assert!(dir.path().join("flows/hello.lua").is_file());
    assert_eq!(
        fs::read_to_string(dir.path().join("taskhost.toml")).unwrap(),
        "[log]\nfilter = \"warn\"\n"
    );
}

#[test]
fn test_init_writes_config_named_by_flag() {
    let dir = TempDir::new().unwrap();

    taskhost_cmd(&dir)
        .args(["--config", "ci.toml", "init"])
        .assert()
        .success();

    assert!(dir.path().join("ci.toml").is_file());
    assert!(!dir.path().join("taskhost.toml").exists());

    let flow = write_flow(&dir, "ok.lua", "return { main = function() return true end }");
    taskhost_cmd(&dir)
        .args(["--config", "ci.toml", "run"])
        .arg(&flow)
        .assert()
        .success();
}

#[test]
fn test_init_resolves_config_against_target_dir() {
    let dir = TempDir::new().unwrap();

    taskhost_cmd(&dir)
        .args(["--config", "conf/ci.toml", "init", "proj"])
        .assert()
        .success();

    assert!(dir.path().join("proj/conf/ci.toml").is_file());
    assert!(dir.path().join("proj/flows/hello.lua").is_file());
}
