// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export command implementation.

use regexplore::ExitCode;
use regexplore::cli::{Cli, ExportArgs};
use regexplore::destination::Destination;
use regexplore::engine;
use regexplore::export::{self, ExportMode, ExportRequest};

use crate::context::AppContext;

/// Run the export command.
pub fn run(cli: &Cli, args: &ExportArgs) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::load(cli)?;
    let mut history = ctx.load_history()?;

    // Reject a bad request before reading input.
    let template = match args.mode {
        ExportMode::Template => {
            Some(args.template.as_deref().unwrap_or(&ctx.config.export.template))
        }
        _ => args.template.as_deref(),
    };
    let request = ExportRequest::build(args.mode, args.groups.as_deref(), template)?;
    let destination = destination(args);

    let text = args.input.source().read()?;
    let set = engine::evaluate(&args.pattern, text.as_str())?;

    let payload = export::export(&set, &request)?;
    destination.write(&payload)?;

    if !args.pattern.is_empty() {
        history.record(&args.pattern, set.first_sample());
        ctx.save_history(&history);
    }
    if destination != Destination::Stdout {
        eprintln!("exported {} matches to {}", set.len(), destination.describe());
    }
    Ok(ExitCode::Success)
}

fn destination(args: &ExportArgs) -> Destination {
    match (&args.output, args.clipboard) {
        (Some(path), _) => Destination::File(path.clone()),
        (None, true) => Destination::Clipboard,
        (None, false) => Destination::Stdout,
    }
}
