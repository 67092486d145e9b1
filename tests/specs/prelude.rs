// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::Command;
pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Returns a Command configured to run the regexplore binary
pub fn regexplore_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("regexplore"))
}

/// A scratch directory acting as both the working directory and `$HOME`.
///
/// A `.git` marker stops config discovery from walking out of the sandbox,
/// and history goes to `history.json` inside it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }

    /// Parsed history file.
    pub fn history(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("history.json")).unwrap()
    }

    /// A command running inside the project with an isolated environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = regexplore_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("REGEXPLORE_HISTORY", self.history_path())
            .env("NO_COLOR", "1")
            .env_remove("XDG_DATA_HOME")
            .env_remove("REGEXPLORE_CONFIG")
            .env_remove("REGEXPLORE_LOG");
        cmd
    }
}
