//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_migrate_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("migrate")
        .arg("--database-url")
        .arg(format!("sqlite://{}", path.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schema ready"));
    assert!(path.exists());
}

#[test]
fn test_migrate_reads_database_url_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from-env.db");

    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.current_dir(dir.path())
        .env("DATABASE_URL", format!("sqlite://{}", path.display()))
        .arg("migrate");

    cmd.assert().success();
    assert!(path.exists());
}
