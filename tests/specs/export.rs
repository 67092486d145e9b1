// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `regexplore export`.

use crate::prelude::*;

const PAIRS: &str = "a=1\nb=2\n";
const PAIR_PATTERN: &str = r"(\w)=(\d)";

#[test]
fn json_export_keys_every_group() {
    let project = Project::empty();
    let output = project
        .cmd()
        .args(["export", PAIR_PATTERN])
        .write_stdin(PAIRS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["regex"], PAIR_PATTERN);
    assert_eq!(doc["matches"][0], serde_json::json!({"0": "a=1", "1": "a", "2": "1"}));
    assert_eq!(doc["matches"][1]["1"], "b");
}

#[test]
fn json_export_without_matches_has_empty_array() {
    let project = Project::empty();
    let output =
        project.cmd().args(["export", "zzz"]).write_stdin(PAIRS).output().unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["matches"], serde_json::json!([]));
}

#[test]
fn groups_export_keeps_selected_groups() {
    let project = Project::empty();
    let output = project
        .cmd()
        .args(["export", PAIR_PATTERN, "--mode", "groups", "--groups", "2, 9"])
        .write_stdin(PAIRS)
        .output()
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["matches"], serde_json::json!([{"2": "1"}, {"2": "2"}]));
}

#[test]
fn template_export_renders_each_match() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", PAIR_PATTERN, "--mode", "template", "--template", r"$2:$1\t$3"])
        .write_stdin(PAIRS)
        .assert()
        .success()
        .stdout("1:a\t$3\n2:b\t$3");
}

#[test]
fn template_defaults_to_config() {
    let project = Project::empty();
    project.file("regexplore.toml", "version = 1\n\n[export]\ntemplate = \"<$1>\"\n");
    project
        .cmd()
        .args(["export", PAIR_PATTERN, "--mode", "template"])
        .write_stdin(PAIRS)
        .assert()
        .success()
        .stdout("<a>\n<b>");
}

#[test]
fn captures_export_is_tab_separated() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", PAIR_PATTERN, "--mode", "captures"])
        .write_stdin(PAIRS)
        .assert()
        .success()
        .stdout("a\t1\nb\t2\n");
}

#[test]
fn export_to_file_writes_identical_bytes() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", PAIR_PATTERN, "--mode", "lines", "-o", "out.tsv"])
        .write_stdin(PAIRS)
        .assert()
        .success()
        .stdout("")
        .stderr(predicates::str::contains("exported 2 matches"));
    assert_eq!(project.read("out.tsv"), "a=1\ta\t1\nb=2\tb\t2\n");
}

// =============================================================================
// Validation happens before any output
// =============================================================================

#[test]
fn empty_template_is_rejected() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", "a", "--mode", "template", "--template", "", "-o", "out.txt"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("custom format string cannot be empty"));
    assert!(!project.path().join("out.txt").exists());
}

#[test]
fn non_numeric_group_is_rejected() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", "a", "--mode", "groups", "--groups", "1,x"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("invalid group number: x"));
}

#[test]
fn missing_groups_is_empty_selector() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", "a", "--mode", "groups"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("group numbers cannot be empty"));
}

#[test]
fn stdout_and_file_receive_identical_bytes() {
    let project = Project::empty();
    let args = ["export", r"(\w)", "--mode", "template", "--template", "$1"];

    let stdout = project.cmd().args(args).write_stdin("ab").output().unwrap().stdout;
    project.cmd().args(args).args(["-o", "out.txt"]).write_stdin("ab").assert().success();

    assert_eq!(stdout, b"a\nb");
    assert_eq!(std::fs::read(project.path().join("out.txt")).unwrap(), stdout);
}

#[test]
fn failed_export_leaves_history_untouched() {
    let project = Project::empty();
    project
        .cmd()
        .args(["export", "b", "-o", "no/such/dir/out.json"])
        .write_stdin("abc")
        .assert()
        .code(3)
        .stderr(predicates::str::contains("no/such/dir/out.json"));
    assert!(!project.history_path().exists());
}

#[test]
fn failed_export_keeps_existing_history() {
    let project = Project::empty();
    project.cmd().args(["export", "a"]).write_stdin("abc").assert().success();
    let before = project.read("history.json");

    project.cmd().args(["export", "a", "-o", "no/such/dir/out.json"]).write_stdin("abc").assert().code(3);

    assert_eq!(project.read("history.json"), before);
}

#[test]
fn export_records_history() {
    let project = Project::empty();
    project.cmd().args(["export", "b"]).write_stdin("abc").assert().success();
    assert_eq!(project.history()["patterns"][0]["regex"], "b");
}
