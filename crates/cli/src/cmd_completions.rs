// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.

use clap::CommandFactory;

use regexplore::ExitCode;
use regexplore::cli::{Cli, CompletionsArgs};

pub fn run(args: &CompletionsArgs) -> anyhow::Result<ExitCode> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "regexplore", &mut std::io::stdout());
    Ok(ExitCode::Success)
}
