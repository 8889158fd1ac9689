//! Integration tests for the treepath CLI
//!
//! These tests run the treepath binary against small seeded star trees.
//! With `--degree 3 --radius 1` the tree is:
//!
//! ```text
//!  0 - 1 - {2, 3}
//!  0 - 4 - {5, 6}
//!  0 - 7 - {8, 9}
//! ```

mod common;

use common::{stderr_json, stdout_json, treepath};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SMALL_TREE: [&str; 6] = ["--degree", "3", "--radius", "1", "--seed", "1"];

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    treepath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: treepath"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    treepath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treepath"));
}

#[test]
fn test_no_command_prints_banner() {
    treepath()
        .assert()
        .success()
        .stdout(predicate::str::contains("treepath --help"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_human_output() {
    treepath()
        .args(["search", "--from", "2", "--to", "5"])
        .args(SMALL_TREE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 -> 1 -> 0 -> 4 -> 5\n"))
        .stdout(predicate::str::contains("4 hops"));
}

#[test]
fn test_search_every_algorithm() {
    for algorithm in ["bfs", "dfs", "iddfs", "bidirectional-bfs", "bidirectional-iddfs"] {
        let output = treepath()
            .args(["--format", "json", "search", "--from", "9", "--to", "3"])
            .args(["--algorithm", algorithm])
            .args(SMALL_TREE)
            .output()
            .unwrap();
        assert!(output.status.success(), "{algorithm}");

        let json = stdout_json(&output);
        assert_eq!(json["algorithm"], algorithm);
        assert_eq!(json["hops"], 4);
        assert_eq!(json["path"]["nodes"], serde_json::json!([9, 7, 0, 1, 3]));
        assert_eq!(json["seed"], 1);
    }
}

#[test]
fn test_search_validating_bfs() {
    let output = treepath()
        .args(["--format", "json", "search", "--from", "0", "--to", "8"])
        .args(["--algorithm", "bfs", "--validate"])
        .args(SMALL_TREE)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["algorithm"], "bfs-validating");
}

#[test]
fn test_search_trivial_path() {
    treepath()
        .args(["search", "--from", "4", "--to", "4", "--quiet"])
        .args(SMALL_TREE)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_search_unknown_node_exit_code_2() {
    treepath()
        .args(["search", "--from", "0", "--to", "99"])
        .args(SMALL_TREE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown node: 99"));
}

#[test]
fn test_search_negative_node_id() {
    treepath()
        .args(["search", "--from", "-1", "--to", "0"])
        .args(SMALL_TREE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown node: -1"));
}

#[test]
fn test_search_depth_bound_exit_code_1() {
    treepath()
        .args(["search", "--from", "2", "--to", "5"])
        .args(["--algorithm", "iddfs", "--max-depth", "3"])
        .args(SMALL_TREE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("path not found from 2 to 5"));
}

#[test]
fn test_search_negative_max_depth_exit_code_2() {
    treepath()
        .args(["search", "--from", "2", "--to", "5"])
        .args(["--algorithm", "bidirectional-iddfs", "--max-depth", "-1"])
        .args(SMALL_TREE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maximum depth"));
}

#[test]
fn test_search_unknown_algorithm_exit_code_2() {
    treepath()
        .args(["search", "--from", "0", "--to", "1", "--algorithm", "dijkstra"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_degree_exit_code_2() {
    treepath()
        .args(["search", "--from", "0", "--to", "0", "--degree", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid degree"));
}

#[test]
fn test_json_error_envelope() {
    let output = treepath()
        .args(["--format", "json", "search", "--from", "0", "--to", "42"])
        .args(SMALL_TREE)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unknown_node");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = treepath()
        .args(["--format", "json", "search", "--from", "zero", "--to", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format_exit_code_2() {
    treepath()
        .args(["--format", "yaml", "check"])
        .assert()
        .code(2);
}

// ============================================================================
// check and demo
// ============================================================================

#[test]
fn test_check_reports_acyclic() {
    treepath()
        .arg("check")
        .args(SMALL_TREE)
        .assert()
        .success()
        .stdout(predicate::str::contains("acyclic: true"))
        .stdout(predicate::str::contains("nodes: 10, edges: 9"));
}

#[test]
fn test_check_json() {
    let output = treepath()
        .args(["--format", "json", "check", "--degree", "4", "--radius", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 1);
    assert_eq!(json["edges"], 0);
    assert_eq!(json["acyclic"], true);
}

#[test]
fn test_check_deep_binary_tree() {
    treepath()
        .args(["check", "--degree", "2", "--radius", "300000", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 600003, edges: 600002"))
        .stdout(predicate::str::contains("acyclic: true"));
}

#[test]
fn test_demo_algorithms_agree() {
    treepath()
        .args(["demo", "--degree", "3", "--radius", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<<< seed = 7 >>>"))
        .stdout(predicate::str::contains("the tree is acyclic: true"))
        .stdout(predicate::str::contains("bidirectional-iddfs"))
        .stdout(predicate::str::contains("algorithms agree: true"));
}

#[test]
fn test_demo_json_is_reproducible() {
    let run = || {
        let output = treepath()
            .args(["--format", "json", "demo", "--degree", "4", "--radius", "2", "--seed", "3"])
            .output()
            .unwrap();
        assert!(output.status.success());
        stdout_json(&output)
    };

    let first = run();
    let second = run();
    assert_eq!(first["runs"].as_array().unwrap().len(), 5);
    assert_eq!(first["agreed"], true);
    assert_eq!(first["nodes"], 53);
    assert_eq!(first["source"], second["source"]);
    assert_eq!(first["target"], second["target"]);
    assert_eq!(first["runs"][0]["path"], second["runs"][0]["path"]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("treepath.toml"),
        "algorithm = \"dfs\"\n\n[builder]\ndegree = 3\nradius = 1\nseed = 5\n",
    )
    .unwrap();

    let output = treepath()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "--from", "8", "--to", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["seed"], 5);
    assert_eq!(json["path"]["nodes"], serde_json::json!([8, 7, 9]));
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "algorithm = \"iddfs\"\nmax_depth = 1\n\n[builder]\ndegree = 3\nradius = 1\n",
    )
    .unwrap();

    treepath()
        .arg("--config")
        .arg(&config)
        .args(["search", "--from", "2", "--to", "3", "--seed", "1"])
        .assert()
        .code(1);

    treepath()
        .arg("--config")
        .arg(&config)
        .args(["search", "--from", "2", "--to", "3", "--seed", "1", "--max-depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 -> 1 -> 3\n"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "algorithm = [not toml").unwrap();

    treepath()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_config_exit_code_1() {
    let dir = tempdir().unwrap();

    treepath()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("check")
        .assert()
        .code(1);
}
