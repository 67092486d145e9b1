// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in quick reference of common patterns and escapes.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;

/// A named pattern or escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Ready-to-use patterns.
pub const COMMON_PATTERNS: &[Entry] = &[
    Entry { name: "Email", pattern: r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$" },
    Entry { name: "URL", pattern: r"https?://[\w./?=&%#-]+" },
    Entry { name: "IPv4 address", pattern: r"\b(?:\d{1,3}\.){3}\d{1,3}\b" },
    Entry { name: "Date (YYYY-MM-DD)", pattern: r"\d{4}-\d{2}-\d{2}" },
    Entry { name: "Username", pattern: r"^[a-zA-Z0-9_-]{3,16}$" },
];

/// Escapes and character classes.
pub const ESCAPES: &[Entry] = &[
    Entry { name: "Digit", pattern: r"\d" },
    Entry { name: "Non-digit", pattern: r"\D" },
    Entry { name: "Word character", pattern: r"\w" },
    Entry { name: "Non-word character", pattern: r"\W" },
    Entry { name: "Whitespace", pattern: r"\s" },
    Entry { name: "Non-whitespace", pattern: r"\S" },
    Entry { name: "Tab", pattern: r"\t" },
    Entry { name: "Newline", pattern: r"\n" },
    Entry { name: "Carriage return", pattern: r"\r" },
    Entry { name: "Word boundary", pattern: r"\b" },
    Entry { name: "Literal dot", pattern: r"\." },
    Entry { name: "Literal asterisk", pattern: r"\*" },
];

/// Write both sections, names padded into a column.
pub fn render<W: WriteColor>(out: &mut W) -> io::Result<()> {
    for (title, entries) in [("Common patterns", COMMON_PATTERNS), ("Escapes", ESCAPES)] {
        out.set_color(&scheme::header())?;
        writeln!(out, "{title}")?;
        out.reset()?;
        let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for entry in entries {
            write!(out, "  {:<width$}  ", entry.name)?;
            out.set_color(&scheme::pattern())?;
            writeln!(out, "{}", entry.pattern)?;
            out.reset()?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cheatsheet_tests.rs"]
mod tests;
