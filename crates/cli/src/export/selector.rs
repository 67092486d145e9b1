// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Group selectors for selected-groups JSON export.

use std::collections::BTreeMap;

use crate::engine::Match;
use crate::error::{Error, Result};

/// Group numbers picked from a comma-separated list such as `"0, 2,3"`.
///
/// Numbers are kept as written; negative or too-large entries are valid but
/// select nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelector {
    groups: Vec<i64>,
}

impl GroupSelector {
    /// Parse a comma-separated list. Blank entries are skipped; any other
    /// non-numeric entry fails the whole list.
    pub fn parse(input: &str) -> Result<Self> {
        let mut groups = Vec::new();
        for entry in input.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let group =
                entry.parse::<i64>().map_err(|_| Error::InvalidGroupNumber(entry.to_string()))?;
            groups.push(group);
        }
        Self::from_groups(groups)
    }

    /// Build from already-parsed numbers.
    pub fn from_groups(groups: Vec<i64>) -> Result<Self> {
        if groups.is_empty() {
            return Err(Error::EmptySelector);
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[i64] {
        &self.groups
    }

    /// The selected groups present in `m`, keyed by their stringified index.
    pub fn pick<'m>(&self, m: &'m Match) -> BTreeMap<String, &'m str> {
        self.groups
            .iter()
            .filter_map(|&g| {
                let index = usize::try_from(g).ok()?;
                m.group(index).map(|value| (index.to_string(), value))
            })
            .collect()
    }
}

impl std::str::FromStr for GroupSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
