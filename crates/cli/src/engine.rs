// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match engine.
//!
//! Compiles a pattern and collects every non-overlapping match with its
//! capture groups. Scanning follows the regex crate's find-all semantics:
//! leftmost match, resume at the match end, step one character past an
//! empty match.

use regex::Regex;

use crate::error::{Error, Result};

/// A single match of a pattern in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    groups: Vec<String>,
    start: usize,
    end: usize,
    line: usize,
}

impl Match {
    /// The matched text (group 0).
    pub fn full_text(&self) -> &str {
        self.groups.first().map(String::as_str).unwrap_or_default()
    }

    /// All groups, index 0 being the full match.
    ///
    /// Groups that did not participate in this match are empty strings.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Group `index`, or `None` when the pattern has no such group.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(String::as_str)
    }

    /// Byte offset of the match start in the source text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the match end.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of line breaks before `start` (0-based line).
    pub fn line_number(&self) -> usize {
        self.line
    }
}

/// The ordered, non-overlapping matches from one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    pattern: String,
    matches: Vec<Match>,
}

impl MatchSet {
    /// An empty set for `pattern` (used for the empty pattern).
    pub fn empty(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), matches: Vec::new() }
    }

    /// The pattern this set was produced from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Full text of the first match, used as the history sample.
    pub fn first_sample(&self) -> &str {
        self.matches.first().map(Match::full_text).unwrap_or_default()
    }

    /// Build a set directly from group lists, with synthetic offsets.
    #[cfg(test)]
    pub(crate) fn from_groups(pattern: &str, rows: &[&[&str]]) -> Self {
        let mut offset = 0;
        let matches = rows
            .iter()
            .map(|row| {
                let groups: Vec<String> = row.iter().map(|g| g.to_string()).collect();
                let len = groups.first().map_or(0, String::len);
                let m = Match { groups, start: offset, end: offset + len, line: 0 };
                offset += len + 1;
                m
            })
            .collect();
        Self { pattern: pattern.to_string(), matches }
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Compile `pattern`, mapping compile failures to [`Error::InvalidPattern`].
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Evaluate `pattern` against `text`.
///
/// An empty pattern yields an empty set without error. An invalid pattern
/// yields [`Error::InvalidPattern`] and no set.
pub fn evaluate(pattern: &str, text: &str) -> Result<MatchSet> {
    if pattern.is_empty() {
        return Ok(MatchSet::empty(pattern));
    }

    let re = compile(pattern)?;
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut line = 0;
    let mut counted_to = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        line += count_line_breaks(&bytes[counted_to..whole.start()]);
        counted_to = whole.start();

        let groups = caps
            .iter()
            .map(|g| g.map(|g| g.as_str().to_string()).unwrap_or_default())
            .collect();
        matches.push(Match { groups, start: whole.start(), end: whole.end(), line });
    }

    tracing::debug!(pattern, matches = matches.len(), "evaluated pattern");
    Ok(MatchSet { pattern: pattern.to_string(), matches })
}

/// Count of line breaks in `text` strictly before byte `offset`.
///
/// Offsets past the end count the whole text.
pub fn byte_offset_to_line(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    count_line_breaks(&text.as_bytes()[..end])
}

fn count_line_breaks(bytes: &[u8]) -> usize {
    memchr::memchr_iter(b'\n', bytes).count()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
