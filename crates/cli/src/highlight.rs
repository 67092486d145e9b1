// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight compositor.
//!
//! Splits a text into plain and match segments and records the source line
//! of every match so the highlighted view can scroll to it.

use std::borrow::Cow;
use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::engine::{MatchSet, byte_offset_to_line};

/// Display class of a segment. Match classes alternate by match index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Plain,
    MatchEven,
    MatchOdd,
}

impl StyleClass {
    fn for_match(index: usize) -> Self {
        if index % 2 == 0 { StyleClass::MatchEven } else { StyleClass::MatchOdd }
    }
}

/// A run of source text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub style: StyleClass,
}

impl HighlightSegment {
    fn new(text: &str, style: StyleClass) -> Self {
        Self { text: text.to_string(), style }
    }
}

/// Output of [`compose`]: the segments plus one line number per match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub segments: Vec<HighlightSegment>,
    pub match_lines: Vec<usize>,
}

impl Highlight {
    /// A single plain segment, for empty or invalid patterns.
    pub fn plain(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![HighlightSegment::new(text, StyleClass::Plain)]
        };
        Self { segments, match_lines: Vec::new() }
    }

    /// Concatenation of all segment texts, unsanitized.
    pub fn source_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Split `text` around the matches of `set`.
///
/// `set` must come from evaluating against this same `text`.
pub fn compose(text: &str, set: &MatchSet) -> Highlight {
    let mut segments = Vec::with_capacity(set.len() * 2 + 1);
    let mut match_lines = Vec::with_capacity(set.len());
    let mut last = 0;

    for (i, m) in set.iter().enumerate() {
        if m.start() > last {
            segments.push(HighlightSegment::new(&text[last..m.start()], StyleClass::Plain));
        }
        segments.push(HighlightSegment::new(&text[m.start()..m.end()], StyleClass::for_match(i)));
        match_lines.push(byte_offset_to_line(text, m.start()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(HighlightSegment::new(&text[last..], StyleClass::Plain));
    }

    Highlight { segments, match_lines }
}

/// Escape terminal control characters so input text cannot emit escape
/// sequences. Line breaks and tabs pass through.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if needs_escape(c) {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    c.is_control() && c != '\n' && c != '\t'
}

/// Write the segments to a color-capable sink, sanitizing each one.
pub fn render<W: WriteColor>(highlight: &Highlight, out: &mut W) -> io::Result<()> {
    for segment in &highlight.segments {
        match segment.style {
            StyleClass::Plain => out.reset()?,
            StyleClass::MatchEven => out.set_color(&scheme::match_even())?,
            StyleClass::MatchOdd => out.set_color(&scheme::match_odd())?,
        }
        write!(out, "{}", sanitize(&segment.text))?;
    }
    out.reset()?;
    Ok(())
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
