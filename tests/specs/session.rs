// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `regexplore session`.

use crate::prelude::*;

fn session(project: &Project, text: &str, script: &str) -> Command {
    project.file("input.txt", text);
    let mut cmd = project.cmd();
    cmd.args(["session", "-f", "input.txt"]).write_stdin(script.to_string());
    cmd
}

#[test]
fn session_requires_text_source() {
    let project = Project::empty();
    project.cmd().arg("session").write_stdin("").assert().code(2);
}

#[test]
fn pattern_line_shows_text_and_count() {
    let project = Project::empty();
    session(&project, "cat dog cat\n", "cat\n:q\n")
        .assert()
        .success()
        .stdout("cat dog cat\n[cat] 2 matches\n");
}

#[test]
fn navigation_wraps_around() {
    let project = Project::empty();
    session(&project, "x\ny\nx\n", "x\n:n\n:n\n:n\n:N\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "1/2 line 1: x\n2/2 line 3: x\n1/2 line 1: x\n2/2 line 3: x\n",
        ));
}

#[test]
fn list_navigation_prints_match_blocks() {
    let project = Project::empty();
    session(&project, "a=1\nb=2\n", "(\\w)=(\\d)\n:n list\n:n list\n:N list\n")
        .assert()
        .success()
        .stdout(predicates::str::ends_with(
            "1/2 row 1\n0: a=1\n    1: a\n    2: 1\n\
             2/2 row 5\n1: b=2\n    1: b\n    2: 2\n\
             1/2 row 1\n0: a=1\n    1: a\n    2: 1\n",
        ));
}

#[test]
fn list_and_text_navigation_share_the_cursor() {
    let project = Project::empty();
    session(&project, "x\ny\nx\n", "x\n:n list\n:n\n")
        .assert()
        .success()
        .stdout(predicates::str::ends_with("1/2 row 1\n0: x\n2/2 line 3: x\n"));
}

#[test]
fn navigation_without_matches() {
    let project = Project::empty();
    session(&project, "abc", "zzz\n:n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("[zzz] 0 matches\n(No matches)\n"));
}

#[test]
fn list_command_renders_match_list() {
    let project = Project::empty();
    session(&project, "k=v", "(\\w)=(\\w)\n:list\n")
        .assert()
        .success()
        .stdout(predicates::str::ends_with("Matches (1)\n0: k=v\n    1: k\n    2: v\n\n"));
}

#[test]
fn invalid_pattern_keeps_session_alive() {
    let project = Project::empty();
    session(&project, "a(b", "(\n\\(\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("invalid regular expression"))
        .stdout(predicates::str::contains("[(] 0 matches"))
        .stdout(predicates::str::contains("[\\(] 1 match\n"));
}

#[test]
fn export_command_prints_payload() {
    let project = Project::empty();
    session(&project, "a=1 b=2", "(\\w)=(\\d)\n:export template $2$1\n")
        .assert()
        .success()
        .stdout(predicates::str::ends_with("1a\n2b\n"));
}

#[test]
fn export_with_unknown_format_is_reported() {
    let project = Project::empty();
    session(&project, "a", "a\n:export yaml\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown export format: yaml"));
}

#[test]
fn accepted_patterns_are_committed() {
    let project = Project::empty();
    session(&project, "ab", "a\nb\n").assert().success();

    let history = project.history();
    assert_eq!(history["patterns"][0]["regex"], "b");
    assert_eq!(history["patterns"][1]["regex"], "a");
    assert_eq!(history["patterns"][0]["count"], 1);
}

#[test]
fn recall_walks_back_through_history() {
    let project = Project::empty();
    project.file(
        "history.json",
        r#"{"patterns":[{"regex":"b","firstMatch":"b","ts":2,"count":1},{"regex":"a","firstMatch":"a","ts":1,"count":1}]}"#,
    );
    session(&project, "aab", ":up\n:up\n:down\n")
        .assert()
        .success()
        .stdout("aab\n[b] 1 match\naab\n[a] 2 matches\naab\n[b] 1 match\n");

    // The recalled pattern is committed on exit.
    assert_eq!(project.history()["patterns"][0]["count"], 2);
}
