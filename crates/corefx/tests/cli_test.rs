//! Integration tests for the `corefx` CLI binary.
//!
//! Every test points `HOME` at its own temporary directory so the real
//! `~/.core` is never touched.
#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

fn corefx_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("corefx");
    cmd.env("HOME", home.path())
        .env_remove("CORE_REST")
        .env_remove("COREFX_RESOURCES")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = corefx_cmd(&home).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    corefx_cmd(&home).arg("--help").assert().success().stdout(
        predicate::str::contains("show")
            .and(predicate::str::contains("node-types"))
            .and(predicate::str::contains("paths"))
            .and(predicate::str::contains("--core-rest")),
    );
}

// ── show ────────────────────────────────────────────────────────────

#[test]
fn test_show_json_seeds_home() {
    let home = tempfile::tempdir().unwrap();

    let output = corefx_cmd(&home).args(["show", "-o", "json"]).output().unwrap();

    assert!(output.status.success());
    let cfg = json_stdout(&output);
    let core = home.path().join(".core");
    assert_eq!(cfg["xmlPath"], core.join("xml").display().to_string());
    assert!(cfg["coreRest"].is_null());
    assert_eq!(cfg["nodeTypeConfigs"].as_array().unwrap().len(), 3);
    assert!(core.join("config.json").is_file());
    assert!(core.join("icons/router-100.png").is_file());
}

#[test]
fn test_show_table() {
    let home = tempfile::tempdir().unwrap();
    corefx_cmd(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("nodeTypes").and(predicate::str::contains("host, PC, mdr")),
        );
}

#[test]
fn test_core_rest_flag_overrides_without_persisting() {
    let home = tempfile::tempdir().unwrap();

    let output = corefx_cmd(&home)
        .args(["--core-rest", "http://localhost:1541", "show", "-o", "json"])
        .output()
        .unwrap();

    assert_eq!(json_stdout(&output)["coreRest"], "http://localhost:1541");
    let on_disk: serde_json::Value =
        serde_json::from_slice(&fs::read(home.path().join(".core/config.json")).unwrap()).unwrap();
    assert!(on_disk["coreRest"].is_null());
}

#[test]
fn test_core_rest_env_var() {
    let home = tempfile::tempdir().unwrap();

    let output = corefx_cmd(&home)
        .env("CORE_REST", "http://x:1234")
        .args(["show", "-o", "json"])
        .output()
        .unwrap();

    assert_eq!(json_stdout(&output)["coreRest"], "http://x:1234");
}

#[test]
fn test_corrupt_config_exits_with_config_code() {
    let home = tempfile::tempdir().unwrap();
    corefx_cmd(&home).arg("show").assert().success();
    fs::write(home.path().join(".core/config.json"), "{").unwrap();

    corefx_cmd(&home)
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration unavailable"));
}

// ── node-types ──────────────────────────────────────────────────────

#[test]
fn test_node_types_plain() {
    let home = tempfile::tempdir().unwrap();
    corefx_cmd(&home)
        .args(["node-types", "-o", "plain"])
        .assert()
        .success()
        .stdout("host\nPC\nmdr\n");
}

#[test]
fn test_node_types_json_has_sorted_services() {
    let home = tempfile::tempdir().unwrap();

    let output = corefx_cmd(&home).args(["nt", "-o", "json"]).output().unwrap();

    let types = json_stdout(&output);
    assert_eq!(types[2]["model"], "mdr");
    assert_eq!(types[2]["category"], "DEFAULT");
    assert_eq!(
        types[2]["services"],
        serde_json::json!(["IPForward", "OSPFv3MDR", "zebra"])
    );
}

// ── paths ───────────────────────────────────────────────────────────

#[test]
fn test_paths_does_not_create_home() {
    let home = tempfile::tempdir().unwrap();

    let output = corefx_cmd(&home).args(["paths", "-o", "json"]).output().unwrap();

    let view = json_stdout(&output);
    assert_eq!(view["state"], "Missing");
    assert!(view["configFile"].as_str().unwrap().ends_with(".core/config.json"));
    assert!(!home.path().join(".core").exists());
}

// ── save ────────────────────────────────────────────────────────────

#[test]
fn test_save_persists_override() {
    let home = tempfile::tempdir().unwrap();

    corefx_cmd(&home)
        .args(["--core-rest", "http://saved:8000", "save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved configuration"));

    let on_disk: serde_json::Value =
        serde_json::from_slice(&fs::read(home.path().join(".core/config.json")).unwrap()).unwrap();
    assert_eq!(on_disk["coreRest"], "http://saved:8000");
    assert_eq!(
        on_disk["nodeTypeConfigs"][2]["services"],
        serde_json::json!(["IPForward", "OSPFv3MDR", "zebra"])
    );
}

// ── resources ───────────────────────────────────────────────────────

#[test]
fn test_resource_dir_missing_icon_fails() {
    let home = tempfile::tempdir().unwrap();
    let resources = tempfile::tempdir().unwrap();
    fs::create_dir(resources.path().join("icons")).unwrap();
    fs::write(resources.path().join("config.json"), "{}").unwrap();
    fs::write(resources.path().join("icons/host-100.png"), b"h").unwrap();

    corefx_cmd(&home)
        .arg("--resources")
        .arg(resources.path())
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("pc-100.png"));

    assert!(home.path().join(".core/icons/host-100.png").is_file());
}

#[test]
fn test_rerun_after_failed_first_run_exits_with_config_code() {
    let home = tempfile::tempdir().unwrap();
    let resources = tempfile::tempdir().unwrap();
    fs::write(resources.path().join("config.json"), "{}").unwrap();

    corefx_cmd(&home)
        .arg("--resources")
        .arg(resources.path())
        .arg("show")
        .assert()
        .code(3);

    corefx_cmd(&home)
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("xmlPath"));
}
