// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! System clipboard access through the platform's clipboard tools.
//!
//! Tools are tried in order; one that is not installed is skipped, one that
//! runs and fails ends the attempt with its error.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// A clipboard helper program and its arguments.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl Tool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// Tools that write stdin to the clipboard, in preference order.
pub fn copy_tools() -> Vec<Tool> {
    if cfg!(target_os = "macos") {
        vec![Tool::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![Tool::new("clip", &[])]
    } else {
        let mut tools = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            tools.push(Tool::new("wl-copy", &[]));
        }
        tools.push(Tool::new("xclip", &["-selection", "clipboard"]));
        tools.push(Tool::new("xsel", &["--clipboard", "--input"]));
        tools
    }
}

/// Tools that print the clipboard to stdout, in preference order.
pub fn paste_tools() -> Vec<Tool> {
    if cfg!(target_os = "macos") {
        vec![Tool::new("pbpaste", &[])]
    } else if cfg!(windows) {
        vec![Tool::new("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])]
    } else {
        let mut tools = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            tools.push(Tool::new("wl-paste", &["--no-newline"]));
        }
        tools.push(Tool::new("xclip", &["-selection", "clipboard", "-o"]));
        tools.push(Tool::new("xsel", &["--clipboard", "--output"]));
        tools
    }
}

/// Write `data` to the system clipboard.
pub fn copy(data: &[u8]) -> io::Result<()> {
    first_available(&copy_tools(), |tool| run_copy(tool, data))
}

/// Read the system clipboard as text.
pub fn paste() -> io::Result<String> {
    first_available(&paste_tools(), run_paste)
}

fn first_available<T>(tools: &[Tool], mut run: impl FnMut(&Tool) -> io::Result<T>) -> io::Result<T> {
    for tool in tools {
        match run(tool) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(program = tool.program, "clipboard tool not installed");
            }
            result => return result,
        }
    }
    let names: Vec<_> = tools.iter().map(|t| t.program).collect();
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no clipboard tool found (tried {})", names.join(", ")),
    ))
}

fn run_copy(tool: &Tool, data: &[u8]) -> io::Result<()> {
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(data)?;
    }
    let output = child.wait_with_output()?;
    check_status(tool, &output)
}

fn run_paste(tool: &Tool) -> io::Result<String> {
    let output = Command::new(tool.program).args(tool.args).stdin(Stdio::null()).output()?;
    check_status(tool, &output)?;
    String::from_utf8(output.stdout)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn check_status(tool: &Tool, output: &std::process::Output) -> io::Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(io::Error::other(format!("{} failed: {}", tool.program, stderr.trim())))
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod tests;
