// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cheatsheet command implementation.

use std::io::Write;

use termcolor::StandardStream;

use regexplore::ExitCode;
use regexplore::cheatsheet;
use regexplore::cli::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut out = StandardStream::stdout(cli.color.resolve(cli.no_color));
    cheatsheet::render(&mut out)?;
    out.flush()?;
    Ok(ExitCode::Success)
}
