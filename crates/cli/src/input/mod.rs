// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Initial text sources: a file, the clipboard, or standard input.
//!
//! Text is validated as UTF-8 once, when it is read. Files of
//! [`MMAP_THRESHOLD`] bytes or more are memory-mapped instead of copied.

mod mapped;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::clipboard;
use crate::error::{Error, Result};

pub use mapped::MappedText;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Where the text to match against comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Clipboard,
    Stdin,
}

impl InputSource {
    /// Pick a source from CLI flags. `--file` wins over `--paste`; neither
    /// means stdin.
    pub fn from_flags(file: Option<PathBuf>, paste: bool) -> Self {
        match (file, paste) {
            (Some(path), _) => InputSource::File(path),
            (None, true) => InputSource::Clipboard,
            (None, false) => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Clipboard => "clipboard".to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    /// Read the whole source.
    pub fn read(&self) -> Result<Text> {
        let text = match self {
            InputSource::File(path) => Text::from_file(path),
            InputSource::Clipboard => clipboard::paste().map(Text::Owned),
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf).map(|_| Text::Owned(buf))
            }
        }
        .map_err(|e| Error::Input { source_name: self.describe(), message: describe_io(&e) })?;

        tracing::debug!(source = %self.describe(), bytes = text.len(), "read input text");
        Ok(text)
    }
}

fn describe_io(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::InvalidData => "input is not valid UTF-8".to_string(),
        _ => err.to_string(),
    }
}

/// Input text, known to be valid UTF-8.
pub enum Text {
    Owned(String),
    Mapped(MappedText),
}

impl Text {
    /// Read `path`, mapping it when it is large.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        if std::fs::metadata(path)?.len() < MMAP_THRESHOLD {
            return std::fs::read_to_string(path).map(Text::Owned);
        }
        let mapped = MappedText::open(path)?;
        tracing::debug!(path = %path.display(), bytes = mapped.len(), "memory-mapped input");
        Ok(Text::Mapped(mapped))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Text::Owned(s) => s,
            Text::Mapped(m) => m.as_str(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
