// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use regexplore::cli::{Cli, Command};
use regexplore::color::scheme;
use regexplore::{Error, ExitCode, logging};

mod cmd_cheatsheet;
mod cmd_completions;
mod cmd_export;
mod cmd_history;
mod cmd_match;
mod cmd_session;
mod context;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            report(&err, cli.color.resolve(cli.no_color));
            exit_code_for(&err).into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Match(args) => cmd_match::run(cli, args),
        Command::Export(args) => cmd_export::run(cli, args),
        Command::History(args) => cmd_history::run(cli, args),
        Command::Session(args) => cmd_session::run(cli, args),
        Command::Cheatsheet => cmd_cheatsheet::run(cli),
        Command::Completions(args) => cmd_completions::run(args),
    }
}

/// Engine errors keep their own code; anything else is internal.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(ExitCode::for_error)
        .unwrap_or(ExitCode::InternalError)
}

fn report(err: &anyhow::Error, color: ColorChoice) {
    let mut stderr = StandardStream::stderr(color);
    let _ = stderr.set_color(&scheme::error());
    let _ = write!(stderr, "error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {err:#}");
}
