//! Fixtures for unit tests: sandboxed project directories and input files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

/// An empty directory that looks like a git checkout, so config lookup
/// never leaves it.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Write `(relative path, content)` pairs under `root`, creating directories.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// A temporary input file holding `text`.
pub fn temp_text(text: &str) -> NamedTempFile {
    temp_bytes(text.as_bytes())
}

/// A temporary file holding raw bytes, for inputs that are not UTF-8.
pub fn temp_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Access-log style lines, at least `min_bytes` long in total.
pub fn large_log(min_bytes: usize) -> String {
    let mut log = String::with_capacity(min_bytes + 64);
    let mut id = 0;
    while log.len() < min_bytes {
        writeln!(log, "GET /items?id={id} 200").unwrap();
        id += 1;
    }
    log
}
