// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `regexplore history`.

use crate::prelude::*;

const SEEDED: &str = r#"{
  "patterns": [
    { "regex": "id=\\d+", "firstMatch": "id=42", "ts": 1700000000, "count": 3 },
    { "regex": "[a-z]+@example", "firstMatch": "bob@example", "ts": 1690000000, "count": 1 }
  ]
}"#;

#[test]
fn history_lists_patterns_newest_first() {
    let project = Project::empty();
    project.file("history.json", SEEDED);
    project
        .cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Regex"))
        .stdout(predicates::str::contains("First Match"))
        .stdout(predicates::str::is_match(r"(?s)id=\\\\d\+.*\[a-z\]\+@example").unwrap());
}

#[test]
fn history_query_filters_case_insensitively() {
    let project = Project::empty();
    project.file("history.json", SEEDED);
    project
        .cmd()
        .args(["history", "BOB"])
        .assert()
        .success()
        .stdout(predicates::str::contains("@example"))
        .stdout(predicates::str::contains("id=").not());
}

#[test]
fn history_json_output_uses_file_keys() {
    let project = Project::empty();
    project.file("history.json", SEEDED);
    let output = project.cmd().args(["history", "--output", "json", "--limit", "1"]).output().unwrap();
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["count"], 3);
    assert_eq!(items[0]["firstMatch"], "id=42");
}

#[test]
fn empty_history_says_so() {
    let project = Project::empty();
    project.cmd().arg("history").assert().success().stdout("(No history)\n");
}

#[test]
fn corrupt_history_is_fatal() {
    let project = Project::empty();
    project.file("history.json", "[1, 2");
    project.cmd().arg("history").assert().code(2);
}
