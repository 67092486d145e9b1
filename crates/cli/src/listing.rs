// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match list rendering.
//!
//! The second view of a match set: one block per match with its escaped,
//! middle-truncated full text followed by its capture groups. Blocks are
//! separated by a blank line, so match `i` does not sit on line `i`; the
//! list records the line of every block header for navigation.

use std::fmt::Write as _;
use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::config::defaults;
use crate::engine::MatchSet;

/// Text shown when there is nothing to list.
pub const NO_MATCHES: &str = "(No matches)";

/// Indentation of group rows under their match.
const GROUP_INDENT: &str = "    ";

/// One row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// `"{index}: {value}"` header for a match.
    Match { index: usize, value: String },
    /// Indented `"{index}: {value}"` row for capture group `index`.
    Group { index: usize, value: String },
    /// Separator after each match block.
    Blank,
}

/// The rendered match list plus the line of each match header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchList {
    pub rows: Vec<ListRow>,
    pub match_lines: Vec<usize>,
    pub count: usize,
}

impl MatchList {
    /// View title, e.g. `Matches (3)`.
    pub fn title(&self) -> String {
        format!("Matches ({})", self.count)
    }

    /// Plain text of the list, one row per line.
    pub fn text(&self) -> String {
        if self.rows.is_empty() {
            return NO_MATCHES.to_string();
        }
        let mut out = String::new();
        for row in &self.rows {
            match row {
                ListRow::Match { index, value } => {
                    let _ = writeln!(out, "{index}: {value}");
                }
                ListRow::Group { index, value } => {
                    let _ = writeln!(out, "{GROUP_INDENT}{index}: {value}");
                }
                ListRow::Blank => out.push('\n'),
            }
        }
        out
    }
}

/// Build the match list for `set`, truncating values wider than `max_width`.
pub fn render_match_list(set: &MatchSet, max_width: usize) -> MatchList {
    let mut rows = Vec::new();
    let mut match_lines = Vec::with_capacity(set.len());

    for (i, m) in set.iter().enumerate() {
        match_lines.push(rows.len());
        rows.push(ListRow::Match { index: i, value: display_value(m.full_text(), max_width) });
        let group_width = max_width.saturating_sub(GROUP_INDENT.len());
        for (j, group) in m.groups().iter().enumerate().skip(1) {
            rows.push(ListRow::Group { index: j, value: display_value(group, group_width) });
        }
        rows.push(ListRow::Blank);
    }

    MatchList { rows, match_lines, count: set.len() }
}

/// Build the match list with the default width.
pub fn render_default(set: &MatchSet) -> MatchList {
    render_match_list(set, defaults::display::MAX_WIDTH)
}

/// Escape control characters and quotes, then shorten to `max_width`.
pub fn display_value(value: &str, max_width: usize) -> String {
    truncate_middle(&value.escape_debug().to_string(), max_width)
}

/// Keep `max_width / 2 - 2` characters from each end around `" ... "` when
/// `text` is longer than `max_width` characters.
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    let keep = (max_width / 2).saturating_sub(2);
    let head: String = text.chars().take(keep).collect();
    let tail: String = text.chars().skip(len - keep).collect();
    format!("{head} ... {tail}")
}

/// Short preview: the total, then the first `limit` matches with their
/// groups.
pub fn summary(set: &MatchSet, limit: usize) -> String {
    let mut out = format!("total:{}\n", set.len());
    for (i, m) in set.iter().take(limit).enumerate() {
        let _ = writeln!(out, "-----------{i}-------------");
        let _ = writeln!(out, "{}", m.full_text());
        for (j, group) in m.groups().iter().enumerate().skip(1) {
            let _ = writeln!(out, "group {j}: {group}");
        }
    }
    out
}

/// Write the list with colored indices.
pub fn render<W: WriteColor>(list: &MatchList, out: &mut W) -> io::Result<()> {
    out.set_color(&scheme::header())?;
    writeln!(out, "{}", list.title())?;
    out.reset()?;

    if list.rows.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return Ok(());
    }
    render_rows(&list.rows, out)
}

/// Write `rows` without the title, e.g. a single match block.
pub fn render_rows<'a, W, I>(rows: I, out: &mut W) -> io::Result<()>
where
    W: WriteColor,
    I: IntoIterator<Item = &'a ListRow>,
{
    for row in rows {
        match row {
            ListRow::Match { index, value } => {
                out.set_color(&scheme::index())?;
                write!(out, "{index}:")?;
                out.reset()?;
                writeln!(out, " {value}")?;
            }
            ListRow::Group { index, value } => {
                write!(out, "{GROUP_INDENT}")?;
                out.set_color(&scheme::index())?;
                write!(out, "{index}:")?;
                out.reset()?;
                writeln!(out, " {value}")?;
            }
            ListRow::Blank => writeln!(out)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
