//! End-to-end tests for the `stratum` binary.
//!
//! Every run uses `--no-cargo` so no toolchain is needed, and works inside a
//! temporary directory with its own config home.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const LAYERS: [&str; 4] = ["application", "business", "domain", "infrastructure"];

fn stratum(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("stratum");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("STRATUM_SCAFFOLD__ASSUME_YES")
        .env_remove("STRATUM_SCAFFOLD__MODULE_INITIALIZER");
    cmd
}

fn scaffold(dir: &TempDir, extra: &[&str]) -> Command {
    let mut cmd = stratum(dir);
    cmd.args(["--no-cargo", "-p", "shop", "-d"])
        .arg(dir.path())
        .args(extra);
    cmd
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn creates_workspace_and_use_case() {
    let dir = TempDir::new().unwrap();

    scaffold(&dir, &["place_order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding \"place_order\" to file"));

    let project = dir.path().join("shop");
    let readme = read(&project.join("README.md"));
    assert!(readme.starts_with("# Title of your application"));
    assert!(readme.contains("place_order : Explain here the goal"));

    for layer in LAYERS {
        assert!(project.join(layer).join("Cargo.toml").is_file(), "{layer}");
    }
    assert!(project
        .join("business/src/place_order_use_case/place_order_interactor.rs")
        .is_file());
    assert!(project
        .join("application/src/presenters/place_order_presenter.rs")
        .is_file());
    assert!(read(&project.join("Cargo.toml")).starts_with("[workspace]"));
}

#[test]
fn rerun_without_force_conflicts() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir, &["place_order"]).assert().success();
    let readme_before = read(&dir.path().join("shop/README.md"));

    scaffold(&dir, &["place_order"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use case place_order already exists."))
        .stderr(predicate::str::contains("-f"));

    assert_eq!(read(&dir.path().join("shop/README.md")), readme_before);
}

#[test]
fn uppercase_project_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    stratum(&dir)
        .args(["--no-cargo", "-p", "Shop", "-d"])
        .arg(dir.path())
        .arg("place_order")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "ERROR - Project name must be in snake_case",
        ))
        .stderr(predicate::str::contains("Usage"));

    assert!(!dir.path().join("Shop").exists());
}

#[test]
fn uppercase_use_case_is_rejected() {
    let dir = TempDir::new().unwrap();

    scaffold(&dir, &["place_order", "CancelOrder"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "ERROR - Use case must be in snake_case",
        ));

    assert!(!dir.path().join("shop").exists());
}

#[test]
fn no_use_cases_shows_usage() {
    let dir = TempDir::new().unwrap();

    scaffold(&dir, &[])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ERROR - No use cases found"))
        .stderr(predicate::str::contains("--project-name"));
}

#[test]
fn missing_project_name_shows_usage() {
    let dir = TempDir::new().unwrap();

    stratum(&dir)
        .args(["--no-cargo", "place_order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ERROR - No project name found"));
}

#[test]
fn declined_overwrite_changes_nothing() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir, &["place_order"]).assert().success();
    let readme_before = read(&dir.path().join("shop/README.md"));

    scaffold(&dir, &["-f", "place_order"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Do you really want to overwrite use cases (Y/n) : ",
        ));

    assert_eq!(read(&dir.path().join("shop/README.md")), readme_before);
}

#[test]
fn forced_overwrite_with_yes_reregisters() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir, &["place_order"]).assert().success();

    scaffold(&dir, &["-f", "-y", "place_order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you really want").not());

    let readme = read(&dir.path().join("shop/README.md"));
    assert_eq!(readme.matches("place_order : Explain here the goal").count(), 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    scaffold(&dir, &["--dry-run", "place_order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("place_order"));

    assert!(!dir.path().join("shop").exists());
}

#[test]
fn json_output_is_a_single_document() {
    let dir = TempDir::new().unwrap();

    let assert = scaffold(&dir, &["--output-format", "json", "place_order"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["registered_use_cases"][0], "place_order");
    assert_eq!(report["initialized_layers"].as_array().unwrap().len(), 4);
    assert!(!report["files_written"].as_array().unwrap().is_empty());
}

#[test]
fn builtin_initializer_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("stratum.toml");
    fs::write(&config, "[scaffold]\nmodule_initializer = \"builtin\"\n").unwrap();

    stratum(&dir)
        .arg("--config")
        .arg(&config)
        .args(["-p", "shop", "-d"])
        .arg(dir.path())
        .arg("place_order")
        .assert()
        .success();

    assert!(dir.path().join("shop/domain/src/lib.rs").is_file());
}

#[test]
fn missing_config_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();

    stratum(&dir)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--no-cargo", "-p", "shop", "place_order"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();

    stratum(&dir)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stratum"));
}

#[test]
fn help_and_version_exit_zero() {
    let dir = TempDir::new().unwrap();

    stratum(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-name"));

    stratum(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_exits_two() {
    let dir = TempDir::new().unwrap();

    stratum(&dir).arg("--bogus").assert().code(2);
}

#[test]
fn no_color_env_accepts_conventional_values() {
    let dir = TempDir::new().unwrap();

    for value in ["1", "true", "yes", "0", "false"] {
        scaffold(&dir, &["--dry-run", "place_order"])
            .env("NO_COLOR", value)
            .assert()
            .success();
    }

    scaffold(&dir, &["place_order"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
