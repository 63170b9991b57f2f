//! Tests for the `replay`, `clear` and `init` commands

use predicates::prelude::*;
use std::fs;

mod common;
use common::{deferr_in, fixtures};

#[test]
fn test_replay_without_pending_report_is_silent_success() {
    let (project, _) = fixtures::create_project().expect("Failed to create test fixture");

    deferr_in(project.path())
        .arg("replay")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_replay_in_bare_project_is_silent_success() {
    let project = fixtures::create_bare_project().expect("Failed to create test fixture");

    deferr_in(project.path())
        .arg("replay")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_replay_passes_non_utf8_report_through() {
    let (project, exception) = fixtures::create_project().expect("Failed to create test fixture");
    let stored = b"caf\xe9: r\xe9sultat invalide\n".to_vec();
    fs::write(&exception, &stored).unwrap();

    deferr_in(project.path())
        .arg("replay")
        .assert()
        .success()
        .stdout(stored);
}

#[test]
fn test_replay_prints_stored_report_verbatim_twice() {
    let (project, exception) = fixtures::create_project().expect("Failed to create test fixture");

    deferr_in(project.path())
        .args(["report", "division by zero", "--script", "foo.py"])
        .assert()
        .code(1);
    let stored = fs::read(&exception).expect("deferred report should exist");

    for _ in 0..2 {
        let output = deferr_in(project.path())
            .arg("replay")
            .output()
            .expect("Command execution failed");
        assert!(output.status.success());
        assert_eq!(output.stdout, stored);
    }

    assert!(exception.exists(), "replay must not remove the report");
}

#[test]
fn test_replay_explicit_file() {
    let (project, _) = fixtures::create_project().expect("Failed to create test fixture");
    let custom = project.path().join("other.log");
    fs::write(&custom, "hand written report\n").expect("Failed to write test file");

    deferr_in(project.path())
        .args(["replay", "--file"])
        .arg(&custom)
        .assert()
        .success()
        .stdout("hand written report\n");
}

#[test]
fn test_clear_removes_pending_report() {
    let (project, exception) = fixtures::create_project().expect("Failed to create test fixture");
    deferr_in(project.path()).args(["report", "stale"]).assert().code(1);
    assert!(exception.exists());

    deferr_in(project.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    assert!(!exception.exists());
    deferr_in(project.path())
        .arg("replay")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_clear_without_pending_report_succeeds() {
    let (project, _) = fixtures::create_project().expect("Failed to create test fixture");

    deferr_in(project.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending report"));
}

#[test]
fn test_init_then_report_and_replay() {
    let project = fixtures::create_bare_project().expect("Failed to create test fixture");

    deferr_in(project.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .deferr.toml"));

    let config = fs::read_to_string(project.path().join(".deferr.toml"))
        .expect("Failed to read file contents");
    assert!(config.contains("tool-name = \"deferr\""));
    assert!(project.path().join(".deferr").is_dir());

    deferr_in(project.path()).args(["report", "boom"]).assert().code(1);
    deferr_in(project.path())
        .arg("replay")
        .assert()
        .success()
        .stdout(predicate::str::contains("boom"));
}

#[test]
fn test_init_twice_keeps_config() {
    let project = fixtures::create_bare_project().expect("Failed to create test fixture");

    deferr_in(project.path()).arg("init").assert().success();
    deferr_in(project.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
