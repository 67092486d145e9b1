// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! History command implementation.

use std::io::Write;

use termcolor::WriteColor;

use regexplore::ExitCode;
use regexplore::cli::{Cli, HistoryArgs, OutputFormat};
use regexplore::color::scheme;
use regexplore::history::HistoryItem;
use regexplore::listing::truncate_middle;

use crate::context::AppContext;

const PATTERN_WIDTH: usize = 30;
const SAMPLE_WIDTH: usize = 30;

/// Run the history command.
pub fn run(cli: &Cli, args: &HistoryArgs) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::load(cli)?;
    let history = ctx.load_history()?;

    let mut items = history.filter(args.query.as_deref().unwrap_or_default());
    if let Some(limit) = args.limit {
        items.truncate(limit);
    }

    let mut out = ctx.stdout();
    match args.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &items)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_table(&mut out, &items)?,
    }
    out.flush()?;
    Ok(ExitCode::Success)
}

fn write_table<W: WriteColor>(out: &mut W, items: &[&HistoryItem]) -> std::io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "(No history)");
    }

    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|item| {
            [
                truncate_middle(&item.pattern.escape_debug().to_string(), PATTERN_WIDTH),
                item.use_count.to_string(),
                item.last_used_local(),
                truncate_middle(&item.first_match.escape_debug().to_string(), SAMPLE_WIDTH),
            ]
        })
        .collect();

    let header = ["Regex", "Count", "Last Used", "First Match"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    out.set_color(&scheme::header())?;
    write_row(out, &header.map(String::from), &widths)?;
    out.reset()?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 4], widths: &[usize; 4]) -> std::io::Result<()> {
    let [pattern, count, last_used, sample] = cells;
    writeln!(
        out,
        "{pattern:<w0$}  {count:>w1$}  {last_used:<w2$}  {sample}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}
