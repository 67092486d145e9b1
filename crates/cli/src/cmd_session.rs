// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session command implementation.
//!
//! The text is read once; every stdin line then either replaces the pattern
//! or runs a `:` command against the current matches.

use std::io::{BufRead, Write};

use termcolor::{StandardStream, WriteColor};

use regexplore::ExitCode;
use regexplore::cli::{Cli, SessionArgs};
use regexplore::color::scheme;
use regexplore::destination::Destination;
use regexplore::export::{ExportMode, ExportRequest};
use regexplore::highlight;
use regexplore::history::History;
use regexplore::listing::{self, ListRow};
use regexplore::navigator::ViewKind;
use regexplore::session::{Session, SessionInput};

use crate::context::AppContext;

/// Run the session command.
pub fn run(cli: &Cli, args: &SessionArgs) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::load(cli)?;
    let mut history = ctx.load_history()?;

    let text = args.source().read()?;
    let mut session = Session::new(text.as_str(), ctx.config.display.max_width);
    let mut out = ctx.stdout();
    let mut committed = String::new();

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let input = match SessionInput::parse(line.trim_end_matches('\r')) {
            Ok(input) => input,
            Err(err) => {
                report(&ctx, &err.to_string());
                continue;
            }
        };

        match input {
            SessionInput::Quit => break,
            SessionInput::Pattern(pattern) => {
                session.set_pattern(pattern);
                show(&ctx, &session, &mut out)?;
                commit(&ctx, &session, &mut history, &mut committed);
            }
            SessionInput::Next(view) => {
                let line = session.next_match(view);
                show_current(&ctx, &session, view, line, &mut out)?;
            }
            SessionInput::Previous(view) => {
                let line = session.previous_match(view);
                show_current(&ctx, &session, view, line, &mut out)?;
            }
            SessionInput::List => listing::render(session.match_list(), &mut out)?,
            SessionInput::Older => {
                if session.recall_older(&history) {
                    show(&ctx, &session, &mut out)?;
                }
            }
            SessionInput::Newer => {
                if session.recall_newer(&history) {
                    show(&ctx, &session, &mut out)?;
                }
            }
            SessionInput::Export { mode, arg } => {
                out.flush()?;
                match export(&ctx, &session, mode, arg.as_deref()) {
                    Ok(()) => commit(&ctx, &session, &mut history, &mut committed),
                    Err(err) => report(&ctx, &err.to_string()),
                }
            }
        }
        out.flush()?;
    }

    if session.pattern() != committed {
        commit(&ctx, &session, &mut history, &mut committed);
    }
    Ok(ExitCode::Success)
}

/// Print the highlighted text and the match count, or the compile error.
fn show(ctx: &AppContext, session: &Session, out: &mut StandardStream) -> std::io::Result<()> {
    if let Some(err) = session.error() {
        report(ctx, &err.to_string());
    }
    highlight::render(session.highlight(), out)?;
    if !session.text().ends_with('\n') {
        writeln!(out)?;
    }
    let count = session.navigator().count();
    out.set_color(&scheme::header())?;
    writeln!(out, "[{}] {}", session.pattern(), match_count(count))?;
    out.reset()
}

/// Print the match under the cursor as `view` shows it. `line` is the
/// 0-based line of that match in the view.
fn show_current(
    ctx: &AppContext,
    session: &Session,
    view: ViewKind,
    line: usize,
    out: &mut StandardStream,
) -> std::io::Result<()> {
    let navigator = session.navigator();
    let current = navigator.current().and_then(|i| Some((i, session.match_set()?.matches().get(i)?)));
    let Some((index, m)) = current else {
        return writeln!(out, "{}", listing::NO_MATCHES);
    };
    out.set_color(&scheme::index())?;
    write!(out, "{}/{}", index + 1, navigator.count())?;
    out.reset()?;
    match view {
        ViewKind::Highlighted => writeln!(
            out,
            " line {}: {}",
            line + 1,
            listing::display_value(m.full_text(), ctx.config.display.max_width)
        ),
        ViewKind::MatchList => {
            writeln!(out, " row {}", line + 1)?;
            let rows = session.match_list().rows.get(line..).unwrap_or_default();
            listing::render_rows(rows.iter().take_while(|row| **row != ListRow::Blank), out)
        }
    }
}

fn export(
    ctx: &AppContext,
    session: &Session,
    mode: ExportMode,
    arg: Option<&str>,
) -> regexplore::Result<()> {
    let request = match mode {
        ExportMode::Groups => ExportRequest::build(mode, arg, None)?,
        ExportMode::Template => {
            ExportRequest::build(mode, None, Some(arg.unwrap_or(&ctx.config.export.template)))?
        }
        _ => ExportRequest::build(mode, None, None)?,
    };
    let payload = session.export(&request)?;
    Destination::Stdout.write(&payload)?;
    if !payload.is_empty() && !payload.ends_with(b"\n") {
        println!();
    }
    Ok(())
}

fn commit(ctx: &AppContext, session: &Session, history: &mut History, committed: &mut String) {
    if session.commit(history) {
        *committed = session.pattern().to_string();
        ctx.save_history(history);
    }
}

fn match_count(count: usize) -> String {
    match count {
        1 => "1 match".to_string(),
        n => format!("{n} matches"),
    }
}

fn report(ctx: &AppContext, message: &str) {
    let mut stderr = StandardStream::stderr(ctx.color);
    let _ = stderr.set_color(&scheme::error());
    let _ = write!(stderr, "error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {message}");
}
