// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workbench session.
//!
//! Owns the current pattern and text and everything derived from them: the
//! match set, both rendered views, and the navigation cursor. Every pattern
//! or text change re-evaluates synchronously and replaces all derived state.

use crate::engine::{self, MatchSet};
use crate::error::{Error, Result};
use crate::export::{self, ExportMode, ExportRequest};
use crate::highlight::{self, Highlight};
use crate::history::{History, Recall};
use crate::listing::{self, MatchList};
use crate::navigator::{Direction, Navigator, ViewKind};

/// Result of the last evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Matched(MatchSet),
    /// The pattern failed to compile; holds the compiler message.
    Invalid(String),
}

/// Pattern, text, and their derived views.
#[derive(Debug, Clone)]
pub struct Session {
    pattern: String,
    text: String,
    outcome: Outcome,
    highlight: Highlight,
    list: MatchList,
    navigator: Navigator,
    recall: Recall,
    max_width: usize,
}

impl Session {
    /// Start a session over `text` with an empty pattern.
    pub fn new(text: impl Into<String>, max_width: usize) -> Self {
        let mut session = Self {
            pattern: String::new(),
            text: text.into(),
            outcome: Outcome::Matched(MatchSet::empty("")),
            highlight: Highlight::default(),
            list: MatchList::default(),
            navigator: Navigator::new(),
            recall: Recall::new(),
            max_width,
        };
        session.refresh();
        session
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the pattern as typed by the user. Resets history recall.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.recall.reset();
        self.pattern = pattern.into();
        self.refresh();
    }

    /// Replace the text being matched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh();
    }

    /// The current match set; `None` while the pattern is invalid.
    pub fn match_set(&self) -> Option<&MatchSet> {
        match &self.outcome {
            Outcome::Matched(set) => Some(set),
            Outcome::Invalid(_) => None,
        }
    }

    /// The compile error for the current pattern, if it is invalid.
    pub fn error(&self) -> Option<Error> {
        match &self.outcome {
            Outcome::Matched(_) => None,
            Outcome::Invalid(message) => Some(Error::InvalidPattern {
                pattern: self.pattern.clone(),
                message: message.clone(),
            }),
        }
    }

    /// The highlighted view. Plain text while the pattern is empty or invalid.
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// The match list view.
    pub fn match_list(&self) -> &MatchList {
        &self.list
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Move the match cursor and return the line `view` should scroll to.
    pub fn navigate(&mut self, direction: Direction, view: ViewKind) -> usize {
        self.navigator.step(direction);
        self.navigator.current_line(view)
    }

    pub fn next_match(&mut self, view: ViewKind) -> usize {
        self.navigate(Direction::Next, view)
    }

    pub fn previous_match(&mut self, view: ViewKind) -> usize {
        self.navigate(Direction::Previous, view)
    }

    /// Record the current pattern in `history`.
    ///
    /// Empty and invalid patterns are not recorded. Returns whether an entry
    /// was written.
    pub fn commit(&self, history: &mut History) -> bool {
        let Some(set) = self.match_set() else {
            return false;
        };
        if self.pattern.is_empty() {
            return false;
        }
        history.record(&self.pattern, set.first_sample());
        tracing::debug!(pattern = %self.pattern, "committed pattern");
        true
    }

    /// Export the current matches.
    pub fn export(&self, request: &ExportRequest) -> Result<Vec<u8>> {
        match &self.outcome {
            Outcome::Matched(set) => export::export(set, request),
            Outcome::Invalid(message) => Err(Error::InvalidPattern {
                pattern: self.pattern.clone(),
                message: message.clone(),
            }),
        }
    }

    /// Replace the pattern with the next older history entry.
    pub fn recall_older(&mut self, history: &History) -> bool {
        match self.recall.older(history) {
            Some(pattern) => {
                self.pattern = pattern.to_string();
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Replace the pattern with the next newer history entry, or clear it.
    pub fn recall_newer(&mut self, history: &History) -> bool {
        match self.recall.newer(history) {
            Some(pattern) => {
                self.pattern = pattern.to_string();
                self.refresh();
                true
            }
            None => false,
        }
    }

    fn refresh(&mut self) {
        match engine::evaluate(&self.pattern, &self.text) {
            Ok(set) => {
                self.highlight = highlight::compose(&self.text, &set);
                self.list = listing::render_match_list(&set, self.max_width);
                self.navigator.load(
                    set.len(),
                    [
                        (ViewKind::Highlighted, self.highlight.match_lines.clone()),
                        (ViewKind::MatchList, self.list.match_lines.clone()),
                    ],
                );
                self.outcome = Outcome::Matched(set);
            }
            Err(err) => {
                tracing::debug!(pattern = %self.pattern, "invalid pattern: {err}");
                let message = match err {
                    Error::InvalidPattern { message, .. } => message,
                    other => other.to_string(),
                };
                self.highlight = Highlight::plain(&self.text);
                self.list = MatchList::default();
                self.navigator.reset();
                self.outcome = Outcome::Invalid(message);
            }
        }
    }
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Anything that is not a known command replaces the pattern.
    Pattern(String),
    /// `:n`, or `:n list` to step through the match list.
    Next(ViewKind),
    /// `:N`, or `:N list`.
    Previous(ViewKind),
    /// `:list`
    List,
    /// `:up`, recall an older pattern.
    Older,
    /// `:down`, recall a newer pattern.
    Newer,
    /// `:export MODE [ARG]`; ARG is the group list or the template.
    Export { mode: ExportMode, arg: Option<String> },
    /// `:q`
    Quit,
}

impl SessionInput {
    /// Parse one input line, without its line terminator.
    pub fn parse(line: &str) -> Result<Self> {
        let input = match line {
            ":n" => Self::Next(ViewKind::Highlighted),
            ":N" => Self::Previous(ViewKind::Highlighted),
            ":n list" => Self::Next(ViewKind::MatchList),
            ":N list" => Self::Previous(ViewKind::MatchList),
            ":list" => Self::List,
            ":up" => Self::Older,
            ":down" => Self::Newer,
            ":q" | ":quit" => Self::Quit,
            _ => match line.strip_prefix(":export") {
                Some(rest) if rest.is_empty() || rest.starts_with(' ') => parse_export(rest.trim_start())?,
                _ => Self::Pattern(line.to_string()),
            },
        };
        Ok(input)
    }
}

fn parse_export(args: &str) -> Result<SessionInput> {
    let (mode, arg) = match args.split_once(' ') {
        Some((mode, arg)) => (mode, Some(arg.to_string())),
        None => (args, None),
    };
    let mode = match mode {
        "" | "json" => ExportMode::Json,
        "groups" => ExportMode::Groups,
        "template" => ExportMode::Template,
        "lines" => ExportMode::Lines,
        "captures" => ExportMode::Captures,
        other => {
            return Err(Error::UnknownExportMode(other.to_string()));
        }
    };
    Ok(SessionInput::Export { mode, arg })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
