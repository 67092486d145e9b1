// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `regexplore match`.

use crate::prelude::*;

// =============================================================================
// Output modes
// =============================================================================

#[test]
fn match_echoes_text_without_color() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "b+"])
        .write_stdin("abbc\nxbx\n")
        .assert()
        .success()
        .stdout("abbc\nxbx\n");
}

#[test]
fn match_adds_final_newline() {
    let project = Project::empty();
    project.cmd().args(["match", "b"]).write_stdin("abc").assert().success().stdout("abc\n");
}

#[test]
fn count_prints_number_of_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--count", r"\d"])
        .write_stdin("a1b22")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn list_only_shows_matches_and_groups() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--list-only", r"(\w)=(\d)"])
        .write_stdin("a=1 b=2")
        .assert()
        .success()
        .stdout("Matches (2)\n0: a=1\n    1: a\n    2: 1\n\n1: b=2\n    1: b\n    2: 2\n\n");
}

#[test]
fn list_only_without_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--list-only", "zzz"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("Matches (0)\n(No matches)\n");
}

#[test]
fn list_follows_highlighted_text() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--list", "b"])
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout("abc\n\nMatches (1)\n0: b\n\n");
}

#[test]
fn summary_shows_total_and_first_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--summary", r"(\d)"])
        .write_stdin("7 8")
        .assert()
        .success()
        .stdout(
            "total:2\n-----------0-------------\n7\ngroup 1: 7\n-----------1-------------\n8\ngroup 1: 8\n",
        );
}

#[test]
fn summary_respects_configured_limit() {
    let project = Project::empty();
    project.file("regexplore.toml", "version = 1\n\n[display]\nsummary_limit = 1\n");
    project
        .cmd()
        .args(["match", "--summary", r"\d"])
        .write_stdin("1 2 3")
        .assert()
        .success()
        .stdout("total:3\n-----------0-------------\n1\n");
}

#[test]
fn file_input_is_read() {
    let project = Project::empty();
    project.file("input.txt", "one two three");
    project
        .cmd()
        .args(["match", "--count", r"\w+", "-f", "input.txt"])
        .assert()
        .success()
        .stdout("3\n");
}

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn fail_on_empty_exits_one_without_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--fail-on-empty", "zzz"])
        .write_stdin("abc")
        .assert()
        .code(1);
}

#[test]
fn fail_on_empty_succeeds_with_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "--fail-on-empty", "a"])
        .write_stdin("abc")
        .assert()
        .success();
}

#[test]
fn invalid_pattern_is_reported() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "(unclosed"])
        .write_stdin("abc")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid regular expression"));
}

#[test]
fn missing_input_file_is_reported() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "a", "-f", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing.txt"));
}

// =============================================================================
// History
// =============================================================================

#[test]
fn match_records_pattern_in_history() {
    let project = Project::empty();
    project.cmd().args(["match", r"id=\d+"]).write_stdin("id=42 id=7").assert().success();

    let history = project.history();
    assert_eq!(history["patterns"][0]["regex"], r"id=\d+");
    assert_eq!(history["patterns"][0]["firstMatch"], "id=42");
    assert_eq!(history["patterns"][0]["count"], 1);
}

#[test]
fn repeated_pattern_bumps_count() {
    let project = Project::empty();
    for _ in 0..2 {
        project.cmd().args(["match", "a"]).write_stdin("a").assert().success();
    }
    let history = project.history();
    assert_eq!(history["patterns"].as_array().unwrap().len(), 1);
    assert_eq!(history["patterns"][0]["count"], 2);
}

#[test]
fn empty_pattern_is_not_recorded() {
    let project = Project::empty();
    project.cmd().args(["match", ""]).write_stdin("abc").assert().success().stdout("abc\n");
    assert!(!project.history_path().exists());
}

#[test]
fn no_history_leaves_no_file() {
    let project = Project::empty();
    project
        .cmd()
        .args(["--no-history", "match", "a"])
        .write_stdin("a")
        .assert()
        .success();
    assert!(!project.history_path().exists());
}

#[test]
fn non_utf8_input_is_usage_error() {
    let project = Project::empty();
    project
        .cmd()
        .args(["match", "a"])
        .write_stdin(vec![b'a', 0xff, b'\n'])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("failed to read input from stdin: input is not valid UTF-8"));
}

#[test]
fn large_file_input_is_matched() {
    let project = Project::empty();
    let text: String = (0..20000).map(|i| format!("id={i}\n")).collect();
    project.file("big.log", &text);
    project
        .cmd()
        .args(["match", "--count", r"id=\d+", "-f", "big.log"])
        .assert()
        .success()
        .stdout("20000\n");
}

#[test]
fn corrupt_history_stops_before_matching() {
    let project = Project::empty();
    project.file("history.json", "{ not json");
    project
        .cmd()
        .args(["match", "a"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("failed to load history"));
}

#[test]
fn explicit_history_flag_wins() {
    let project = Project::empty();
    let custom = project.path().join("custom/h.json");
    project
        .cmd()
        .args(["--history", custom.to_str().unwrap(), "match", "a"])
        .write_stdin("a")
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!project.history_path().exists());
}
