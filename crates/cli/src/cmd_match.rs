// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::Write;

use anyhow::Context;

use regexplore::ExitCode;
use regexplore::cli::{Cli, MatchArgs};
use regexplore::engine;
use regexplore::highlight;
use regexplore::listing;

use crate::context::AppContext;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::load(cli)?;
    let mut history = ctx.load_history()?;

    let source = args.input.source();
    let text = source.read()?;
    let text = text.as_str();
    let set = engine::evaluate(&args.pattern, text)?;

    if !args.pattern.is_empty() {
        history.record(&args.pattern, set.first_sample());
        ctx.save_history(&history);
    }

    let mut out = ctx.stdout();
    if args.count {
        writeln!(out, "{}", set.len())?;
    } else if args.summary {
        write!(out, "{}", listing::summary(&set, ctx.config.display.summary_limit))?;
    } else {
        if !args.list_only {
            highlight::render(&highlight::compose(text, &set), &mut out)?;
            if !text.is_empty() && !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        if args.list || args.list_only {
            if !args.list_only {
                writeln!(out)?;
            }
            let list = listing::render_match_list(&set, ctx.config.display.max_width);
            listing::render(&list, &mut out)?;
        }
    }
    out.flush().context("failed to write output")?;

    if args.fail_on_empty && set.is_empty() {
        return Ok(ExitCode::NoMatches);
    }
    Ok(ExitCode::Success)
}
