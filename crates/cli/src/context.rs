// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup state shared by the commands: config, history location, colors.

use std::path::PathBuf;

use termcolor::{ColorChoice, StandardStream};

use regexplore::cli::Cli;
use regexplore::config::{self, Config};
use regexplore::history::History;

pub struct AppContext {
    pub config: Config,
    pub history_path: PathBuf,
    pub color: ColorChoice,
}

impl AppContext {
    /// Load the config (explicit, discovered, or default) and resolve where
    /// history lives.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = config::resolve(cli.config.as_deref(), &cwd)?;

        let history_path = if cli.no_history {
            PathBuf::new()
        } else if let Some(path) = &cli.history {
            path.clone()
        } else {
            config.history.resolve_path()
        };
        tracing::debug!(path = %history_path.display(), "history location");

        Ok(Self { config, history_path, color: cli.color.resolve(cli.no_color) })
    }

    /// Load history. A corrupt file stops the command.
    pub fn load_history(&self) -> anyhow::Result<History> {
        Ok(History::load(&self.history_path)?)
    }

    /// Persist history. Failure is reported and otherwise ignored.
    pub fn save_history(&self, history: &History) {
        if let Err(err) = history.save(&self.history_path) {
            tracing::warn!("{err}");
        }
    }

    pub fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color)
    }
}
