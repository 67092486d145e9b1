// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memory-mapped input text.
//!
//! The only module that needs `unsafe`: mapping the file, and viewing the
//! map as `str` after it was validated once at open.
#![allow(unsafe_code)]

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// A read-only map of a file whose bytes are valid UTF-8.
pub struct MappedText {
    mmap: Mmap,
}

impl MappedText {
    /// Map `path` and validate it. Invalid UTF-8 is `InvalidData`.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        // SAFETY: the map is never written through and is dropped with `self`.
        let mmap = unsafe { Mmap::map(&file)? };
        std::str::from_utf8(&mmap).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { mmap })
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: validated in `open`; the map is read-only.
        unsafe { std::str::from_utf8_unchecked(&self.mmap) }
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}
