// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export destinations.
//!
//! Every destination receives the same bytes. Failures are reported as
//! [`Error::Io`] and nothing is retried. A file is written to a sibling
//! temporary first and renamed into place, so a failed export never leaves
//! a partial file behind.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::clipboard;
use crate::error::{Error, Result};

/// Where an export payload goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Clipboard,
    /// Create or overwrite this file.
    File(PathBuf),
}

impl Destination {
    /// Human-readable name used in messages.
    pub fn describe(&self) -> String {
        match self {
            Destination::Stdout => "stdout".to_string(),
            Destination::Clipboard => "clipboard".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }

    /// Deliver `payload`.
    pub fn write(&self, payload: &[u8]) -> Result<()> {
        let result = match self {
            Destination::Stdout => write_stdout(payload),
            Destination::Clipboard => clipboard::copy(payload),
            Destination::File(path) if path.as_os_str().is_empty() => {
                Err(io::Error::new(io::ErrorKind::InvalidInput, "file path cannot be empty"))
            }
            Destination::File(path) => write_file(path, payload),
        };
        result.map_err(|source| Error::Io { destination: self.describe(), source })?;
        tracing::info!(destination = %self.describe(), bytes = payload.len(), "export written");
        Ok(())
    }
}

fn write_stdout(payload: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(payload)?;
    handle.flush()
}

fn write_file(path: &Path, payload: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(payload)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
#[path = "destination_tests.rs"]
mod tests;
