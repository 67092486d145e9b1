// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom export templates.
//!
//! A template is tokenized once into literal runs and `$N` group references.
//! Rendering walks the token list and appends values, so text coming from a
//! match is never scanned for placeholders.

use crate::engine::Match;
use crate::error::{Error, Result};

/// A parsed template piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    /// Reference to group `index`; `token` is the placeholder as written.
    Group { index: usize, token: String },
}

/// A tokenized custom export template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse `raw`, converting `\n`, `\t`, `\r` escapes first.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        let pieces = tokenize(&unescape(raw))?;
        Ok(Self { pieces })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Group indices referenced, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Group { index, .. } => Some(*index),
            Piece::Literal(_) => None,
        })
    }

    /// Append the rendering of `m` to `out`.
    ///
    /// A reference to a group the match does not have is written as the
    /// placeholder itself, so a template/pattern mismatch stays visible.
    pub fn render_into(&self, m: &Match, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Group { index, token } => match m.group(*index) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(token),
                },
            }
        }
    }

    pub fn render(&self, m: &Match) -> String {
        let mut out = String::new();
        self.render_into(m, &mut out);
        out
    }
}

impl std::str::FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Replace the two-character sequences `\n`, `\t`, `\r` with the control
/// characters they name. Scans left to right; other backslashes are kept.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let replacement = match chars.peek() {
                Some('n') => Some('\n'),
                Some('t') => Some('\t'),
                Some('r') => Some('\r'),
                _ => None,
            };
            if let Some(r) = replacement {
                chars.next();
                out.push(r);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Split `text` into literal runs and `$<digits>` references.
fn tokenize(text: &str) -> Result<Vec<Piece>> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }
        let digits = bytes[i + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            i += 1;
            continue;
        }

        let end = i + 1 + digits;
        if literal_start < i {
            pieces.push(Piece::Literal(text[literal_start..i].to_string()));
        }
        let token = &text[i..end];
        let index = token[1..]
            .parse::<usize>()
            .map_err(|_| Error::InvalidGroupNumber(token.to_string()))?;
        pieces.push(Piece::Group { index, token: token.to_string() });

        i = end;
        literal_start = end;
    }
    if literal_start < text.len() {
        pieces.push(Piece::Literal(text[literal_start..].to_string()));
    }
    Ok(pieces)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
