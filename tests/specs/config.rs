// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration loading.

use crate::prelude::*;

#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::empty();
    project.file("regexplore.toml", "version = 1\n\n[display]\nsummary_limit = 0\n");
    project.file("sub/dir/input.txt", "1 2");
    project
        .cmd()
        .current_dir(project.path().join("sub/dir"))
        .args(["match", "--summary", r"\d", "-f", "input.txt"])
        .assert()
        .success()
        .stdout("total:2\n");
}

#[test]
fn explicit_config_flag_is_used() {
    let project = Project::empty();
    let path = project.file("elsewhere.toml", "version = 1\n\n[export]\ntemplate = \"[$0]\"\n");
    project
        .cmd()
        .args(["-C", path.to_str().unwrap(), "export", "b", "--mode", "template"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("[b]");
}

#[test]
fn config_env_var_is_used() {
    let project = Project::empty();
    let path = project.file("env.toml", "version = 1\n\n[history]\nenabled = false\n");
    project
        .cmd()
        .env("REGEXPLORE_CONFIG", &path)
        .args(["match", "a"])
        .write_stdin("a")
        .assert()
        .success();
    assert!(!project.history_path().exists());
}

#[test]
fn unsupported_version_is_fatal() {
    let project = Project::empty();
    project.file("regexplore.toml", "version = 2\n");
    project
        .cmd()
        .args(["match", "a"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config error"));
}

#[test]
fn unknown_key_only_warns() {
    let project = Project::empty();
    project.file("regexplore.toml", "version = 1\n\n[display]\ncolour = true\n");
    project
        .cmd()
        .args(["match", "a"])
        .write_stdin("a")
        .assert()
        .success()
        .stderr(predicates::str::contains("colour"));
}
