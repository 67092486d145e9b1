// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export formatter.
//!
//! Renders a match set as JSON (all groups or selected groups), as a custom
//! `$N` template, or as tab-separated rows. The request is validated in full
//! before anything is produced, so an export either yields its whole payload
//! or an error.

pub mod selector;
pub mod template;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::MatchSet;
use crate::error::{Error, Result};

pub use selector::GroupSelector;
pub use template::Template;

/// Export kind as chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportMode {
    /// JSON with every group of every match
    #[default]
    Json,
    /// JSON with only the selected groups
    Groups,
    /// One line per match from a `$N` template
    Template,
    /// One tab-separated line per match, all groups
    Lines,
    /// One tab-separated line per match, capture groups only
    Captures,
}

/// A fully validated export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRequest {
    AllGroupsJson,
    SelectedGroupsJson(GroupSelector),
    CustomTemplate(Template),
    /// Tab-separated values; group 0 is left out unless `include_full_match`.
    Tabular { include_full_match: bool },
}

impl ExportRequest {
    /// Build a request from raw user input.
    ///
    /// `groups` is required for [`ExportMode::Groups`] and `template` for
    /// [`ExportMode::Template`]; a missing value is treated as empty.
    pub fn build(mode: ExportMode, groups: Option<&str>, template: Option<&str>) -> Result<Self> {
        match mode {
            ExportMode::Json => Ok(Self::AllGroupsJson),
            ExportMode::Groups => {
                GroupSelector::parse(groups.unwrap_or_default()).map(Self::SelectedGroupsJson)
            }
            ExportMode::Template => {
                Template::parse(template.unwrap_or_default()).map(Self::CustomTemplate)
            }
            ExportMode::Lines => Ok(Self::Tabular { include_full_match: true }),
            ExportMode::Captures => Ok(Self::Tabular { include_full_match: false }),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AllGroupsJson => "json",
            Self::SelectedGroupsJson(_) => "groups",
            Self::CustomTemplate(_) => "template",
            Self::Tabular { include_full_match: true } => "lines",
            Self::Tabular { include_full_match: false } => "captures",
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    regex: &'a str,
    matches: Vec<BTreeMap<String, &'a str>>,
}

/// Render `set` according to `request`.
pub fn export(set: &MatchSet, request: &ExportRequest) -> Result<Vec<u8>> {
    let payload = match request {
        ExportRequest::AllGroupsJson => json_all(set)?,
        ExportRequest::SelectedGroupsJson(selector) => json_selected(set, selector)?,
        ExportRequest::CustomTemplate(template) => custom(set, template).into_bytes(),
        ExportRequest::Tabular { include_full_match } => {
            tabular(set, *include_full_match).into_bytes()
        }
    };
    tracing::debug!(kind = request.kind(), matches = set.len(), bytes = payload.len(), "export rendered");
    Ok(payload)
}

/// Every group of every match, keyed `"0"`, `"1"`, ...
pub fn json_all(set: &MatchSet) -> Result<Vec<u8>> {
    let matches = set
        .iter()
        .map(|m| {
            m.groups().iter().enumerate().map(|(i, g)| (i.to_string(), g.as_str())).collect()
        })
        .collect();
    to_json(&JsonExport { regex: set.pattern(), matches })
}

/// Only the selected groups. Matches with none of them are left out.
pub fn json_selected(set: &MatchSet, selector: &GroupSelector) -> Result<Vec<u8>> {
    let matches = set.iter().map(|m| selector.pick(m)).filter(|picked| !picked.is_empty()).collect();
    to_json(&JsonExport { regex: set.pattern(), matches })
}

/// One template rendering per match, joined with newlines.
pub fn custom(set: &MatchSet, template: &Template) -> String {
    let mut out = String::new();
    for (i, m) in set.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        template.render_into(m, &mut out);
    }
    out
}

/// One newline-terminated, tab-separated row per match.
pub fn tabular(set: &MatchSet, include_full_match: bool) -> String {
    let skip = usize::from(!include_full_match);
    let mut out = String::new();
    for m in set {
        let row: Vec<&str> = m.groups().iter().skip(skip).map(String::as_str).collect();
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

fn to_json(doc: &JsonExport<'_>) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(doc).map_err(|e| Error::Io {
        destination: "json encoder".to_string(),
        source: e.into(),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
