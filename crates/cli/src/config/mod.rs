// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `regexplore.toml`.
//!
//! ```toml
//! version = 1
//!
//! [history]
//! path = "~/.regexplore-history.json"
//!
//! [export]
//! template = "$1\t$2"
//!
//! [display]
//! max_width = 100
//! ```
//!
//! Without `-C`, the file is looked for from the working directory upward,
//! stopping at the enclosing git repository root.

pub mod defaults;
mod sections;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub use sections::{DisplayConfig, ExportConfig, HistoryConfig};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config format version (must be 1).
    pub version: i64,

    pub history: HistoryConfig,

    pub export: ExportConfig,

    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            history: HistoryConfig::default(),
            export: ExportConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Known keys per section, for unknown-key warnings.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("history", &["enabled", "path"]),
    ("export", &["template"]),
    ("display", &["max_width", "summary_limit"]),
];

/// Read and parse the config at `path`.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })?;
    parse(&content, path)
}

/// Like [`load`], also logging a warning for every unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let config = load(path)?;
    if let Ok(content) = std::fs::read_to_string(path) {
        for key in unknown_keys(&content) {
            tracing::warn!("unknown config key `{}` in {}", key, path.display());
        }
    }
    Ok(config)
}

/// Resolve the config for a run: `explicit` if given, else the nearest
/// config file above `cwd`, else defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(|| locate(cwd)) else {
        return Ok(Config::default());
    };
    tracing::debug!("using config {}", path.display());
    load_with_warnings(&path)
}

/// Nearest config file at or above `start`. A directory holding `.git` is the
/// last one searched. `regexplore.toml` wins over `.regexplore.toml`.
pub fn locate(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let found = defaults::CONFIG_FILES.iter().map(|name| dir.join(name)).find(|p| p.is_file());
        if found.is_some() {
            return found;
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Parse config text. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.message().to_string() })?;
    if config.version != defaults::CONFIG_VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported config version {} (expected {})",
                config.version,
                defaults::CONFIG_VERSION
            ),
        });
    }
    if config.display.max_width < 8 {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!("display.max_width must be at least 8, got {}", config.display.max_width),
        });
    }
    Ok(config)
}

/// Dotted names of keys the config format does not define.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(content) else {
        return Vec::new();
    };
    let mut unknown = Vec::new();
    for (key, value) in &table {
        if key == "version" {
            continue;
        }
        match KNOWN_KEYS.iter().find(|(section, _)| section == key) {
            None => unknown.push(key.clone()),
            Some((_, fields)) => {
                if let Some(section) = value.as_table() {
                    for field in section.keys() {
                        if !fields.contains(&field.as_str()) {
                            unknown.push(format!("{key}.{field}"));
                        }
                    }
                }
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
