// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern history.
//!
//! A most-recently-used list of committed patterns, persisted as JSON:
//!
//! ```json
//! { "patterns": [ { "regex": "ab.*", "firstMatch": "abc", "ts": 1700000000, "count": 2 } ] }
//! ```
//!
//! Patterns are unique and the list never exceeds
//! [`MAX_ENTRIES`](crate::config::defaults::history::MAX_ENTRIES).

use std::path::Path;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::config::defaults::history::MAX_ENTRIES;
use crate::error::{Error, Result};

/// One remembered pattern. Only `regex` is required on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(rename = "regex")]
    pub pattern: String,

    /// Full text of the first match when the pattern was last used.
    #[serde(rename = "firstMatch", default)]
    pub first_match: String,

    /// Unix seconds of the last use; 0 when unknown.
    #[serde(rename = "ts", default)]
    pub last_used: i64,

    #[serde(rename = "count", default = "first_use")]
    pub use_count: u64,
}

fn first_use() -> u64 {
    1
}

impl HistoryItem {
    /// Last use as `%Y-%m-%d %H:%M:%S` in local time.
    pub fn last_used_local(&self) -> String {
        DateTime::from_timestamp(self.last_used, 0)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

/// Recency-ordered pattern history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    patterns: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from `path`.
    ///
    /// An empty path or a missing file gives an empty history. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Ok(Self::new());
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no history file yet");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(Error::HistoryLoad { path: path.to_path_buf(), message: e.to_string() });
            }
        };

        let mut history: History = serde_json::from_str(&content).map_err(|e| {
            Error::HistoryLoad { path: path.to_path_buf(), message: e.to_string() }
        })?;
        if history.patterns.len() > MAX_ENTRIES {
            tracing::warn!(
                path = %path.display(),
                entries = history.patterns.len(),
                "history exceeds {MAX_ENTRIES} entries, dropping the oldest"
            );
            history.patterns.truncate(MAX_ENTRIES);
        }
        tracing::debug!(path = %path.display(), entries = history.len(), "loaded history");
        Ok(history)
    }

    /// Save history to `path`, creating parent directories.
    ///
    /// An empty path does nothing.
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        let to_error =
            |message: String| Error::HistorySave { path: path.to_path_buf(), message };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| to_error(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| to_error(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| to_error(e.to_string()))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "saved history");
        Ok(())
    }

    /// Record a use of `pattern` now. See [`History::record_at`].
    pub fn record(&mut self, pattern: &str, sample: &str) {
        self.record_at(pattern, sample, Utc::now().timestamp());
    }

    /// Record a use of `pattern` at unix time `now`.
    ///
    /// An existing entry moves to the front with its count incremented and
    /// its sample and timestamp refreshed; a new pattern enters at the front
    /// with count 1. The oldest entries beyond the capacity are dropped.
    pub fn record_at(&mut self, pattern: &str, sample: &str, now: i64) {
        let use_count = match self.patterns.iter().position(|item| item.pattern == pattern) {
            Some(pos) => self.patterns.remove(pos).use_count + 1,
            None => 1,
        };
        self.patterns.insert(
            0,
            HistoryItem {
                pattern: pattern.to_string(),
                first_match: sample.to_string(),
                last_used: now,
                use_count,
            },
        );
        self.patterns.truncate(MAX_ENTRIES);
    }

    /// Items whose pattern or sample contains `query`, ignoring case, in
    /// recency order. An empty query returns everything.
    pub fn filter(&self, query: &str) -> Vec<&HistoryItem> {
        if query.is_empty() {
            return self.patterns.iter().collect();
        }
        let query = query.to_lowercase();
        self.patterns
            .iter()
            .filter(|item| {
                item.pattern.to_lowercase().contains(&query)
                    || item.first_match.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.patterns
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.patterns.get(index)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Up/down recall through history from a pattern input.
///
/// Starts at no entry. `older` walks toward the oldest entry and stops there;
/// `newer` walks back and, past the newest entry, returns to no entry with an
/// empty pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recall {
    index: Option<usize>,
}

impl Recall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected history index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Step to the next older entry. `None` means the input is unchanged.
    pub fn older<'h>(&mut self, history: &'h History) -> Option<&'h str> {
        let next = self.index.map_or(0, |i| i + 1);
        let item = history.get(next)?;
        self.index = Some(next);
        Some(&item.pattern)
    }

    /// Step to the next newer entry, or clear the input after the newest.
    /// `None` means the input is unchanged.
    pub fn newer<'h>(&mut self, history: &'h History) -> Option<&'h str> {
        match self.index? {
            0 => {
                self.index = None;
                Some("")
            }
            i => {
                self.index = Some(i - 1);
                history.get(i - 1).map(|item| item.pattern.as_str())
            }
        }
    }

    /// Forget the position, e.g. after the user edits the pattern.
    pub fn reset(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
