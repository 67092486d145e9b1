// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration sections.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Deserialize;

use super::defaults;

/// `[history]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Persist committed patterns (default: true).
    pub enabled: bool,

    /// History file. Falls back to `$REGEXPLORE_HISTORY`, then the XDG data
    /// directory.
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { enabled: true, path: None }
    }
}

impl HistoryConfig {
    /// Resolve the history file path against the process environment.
    ///
    /// An empty path means history is disabled.
    pub fn resolve_path(&self) -> PathBuf {
        self.resolve_path_with(|key| std::env::var_os(key))
    }

    /// Resolve the history file path, looking variables up with `env`.
    pub fn resolve_path_with<F>(&self, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if !self.enabled {
            return PathBuf::new();
        }
        if let Some(path) = &self.path {
            return path.clone();
        }
        let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(path) = non_empty(defaults::history::PATH_ENV) {
            return PathBuf::from(path);
        }
        let data_dir = non_empty("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(".local/share")));
        match data_dir {
            Some(dir) => dir.join(defaults::history::APP_DIR).join(defaults::history::FILE_NAME),
            None => PathBuf::new(),
        }
    }
}

/// `[export]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Template used when `--template` is not given.
    pub template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { template: defaults::export::TEMPLATE.to_string() }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Truncation width for match list values.
    pub max_width: usize,

    /// Matches shown by `match --summary`.
    pub summary_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_width: defaults::display::MAX_WIDTH,
            summary_limit: defaults::display::SUMMARY_LIMIT,
        }
    }
}
