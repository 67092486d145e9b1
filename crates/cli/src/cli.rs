// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::export::ExportMode;
use crate::input::InputSource;

/// An interactive regular-expression workbench
#[derive(Parser)]
#[command(name = "regexplore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "REGEXPLORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// History file (overrides config and REGEXPLORE_HISTORY)
    #[arg(long, global = true, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Do not read or write pattern history
    #[arg(long, global = true, conflicts_with = "history")]
    pub no_history: bool,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Highlight matches of a pattern and list their groups
    Match(MatchArgs),
    /// Export matches as JSON, a template, or tab-separated lines
    Export(ExportArgs),
    /// List previously used patterns
    History(HistoryArgs),
    /// Read patterns and navigation commands line by line from stdin
    Session(SessionArgs),
    /// Print common patterns and escapes
    Cheatsheet,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the text to match against comes from.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Read text from a file
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "paste")]
    pub file: Option<PathBuf>,

    /// Read text from the system clipboard
    #[arg(long)]
    pub paste: bool,
}

impl InputArgs {
    pub fn source(&self) -> InputSource {
        InputSource::from_flags(self.file.clone(), self.paste)
    }
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Regular expression
    pub pattern: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Show the per-match group list after the highlighted text
    #[arg(short, long)]
    pub list: bool,

    /// Only show the match list
    #[arg(long, conflicts_with = "summary")]
    pub list_only: bool,

    /// Show the match count and the first few matches
    #[arg(short, long)]
    pub summary: bool,

    /// Only print the number of matches
    #[arg(short, long, conflicts_with_all = ["list", "list_only", "summary"])]
    pub count: bool,

    /// Exit with code 1 when nothing matches
    #[arg(long)]
    pub fail_on_empty: bool,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Regular expression
    pub pattern: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Export format
    #[arg(short, long, default_value = "json")]
    pub mode: ExportMode,

    /// Group numbers for --mode groups (comma-separated)
    #[arg(short, long, value_name = "LIST")]
    pub groups: Option<String>,

    /// Template for --mode template, e.g. '$1: $2' (default from config)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "clipboard")]
    pub output: Option<PathBuf>,

    /// Copy to the system clipboard instead of stdout
    #[arg(long)]
    pub clipboard: bool,
}

#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Only show patterns or samples containing this text (case-insensitive)
    pub query: Option<String>,

    /// Maximum entries to show
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SessionArgs {
    /// Read text from a file
    #[arg(short = 'f', long = "file", value_name = "FILE", required_unless_present = "paste")]
    pub file: Option<PathBuf>,

    /// Read text from the system clipboard
    #[arg(long, conflicts_with = "file")]
    pub paste: bool,
}

impl SessionArgs {
    pub fn source(&self) -> InputSource {
        InputSource::from_flags(self.file.clone(), self.paste)
    }
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
