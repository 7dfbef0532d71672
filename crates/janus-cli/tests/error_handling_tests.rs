//! Tests for error handling, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn janus(home: &Path, work: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("janus");
    cmd.current_dir(work)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("JANUS_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn add_template(home: &Path, rel: &str) {
    let dir = home.join(".janus/templates").join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.md"), "template").unwrap();
}

#[test]
fn missing_template_lists_available_and_creates_nothing() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    add_template(home.path(), "python/flask");

    janus(home.path(), work.path())
        .args(["rust", "axum", "-n", "svc"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template 'rust-axum' not found at"))
        .stderr(predicate::str::contains("Available templates:"))
        .stderr(predicate::str::contains("python (flask)"));

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn missing_template_without_root_suggests_init() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    janus(home.path(), work.path())
        .arg("python")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("janus --init"));
}

#[test]
fn existing_project_directory_is_not_overwritten() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    add_template(home.path(), "python/flask");
    fs::create_dir(work.path().join("myapp")).unwrap();
    fs::write(work.path().join("myapp/keep.txt"), "mine").unwrap();

    janus(home.path(), work.path())
        .args(["python", "flask", "--no-git"])
        .write_stdin("myapp\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Directory"))
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Aborting to avoid overwriting"));

    assert_eq!(
        fs::read_to_string(work.path().join("myapp/keep.txt")).unwrap(),
        "mine"
    );
    assert!(!work.path().join("myapp/README.md").exists());
}

#[test]
fn path_like_domain_is_rejected() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    janus(home.path(), work.path())
        .args(["..", "-n", "x"])
        .assert()
        .code(2);
}

#[test]
fn explicit_missing_config_is_a_configuration_error() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    janus(home.path(), work.path())
        .args(["-o", "templates", "--config", "does-not-exist.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_listing_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    janus(home.path(), work.path())
        .args(["-o", "widgets"])
        .assert()
        .code(2);
}
