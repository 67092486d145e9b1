// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Config file format version.
pub const CONFIG_VERSION: i64 = 1;

/// Config file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &["regexplore.toml", ".regexplore.toml"];

/// History defaults.
pub mod history {
    /// Maximum number of remembered patterns (500).
    pub const MAX_ENTRIES: usize = 500;

    /// File name inside the data directory.
    pub const FILE_NAME: &str = "history.json";

    /// Application directory inside the data directory.
    pub const APP_DIR: &str = "regexplore";

    /// Environment variable overriding the history path.
    pub const PATH_ENV: &str = "REGEXPLORE_HISTORY";
}

/// Export defaults.
pub mod export {
    /// Default custom template: the first capture group.
    pub const TEMPLATE: &str = "$1";
}

/// Display defaults.
pub mod display {
    /// Truncation width for match list values (80).
    pub const MAX_WIDTH: usize = 80;

    /// Matches shown by the summary view (5).
    pub const SUMMARY_LIMIT: usize = 5;
}
