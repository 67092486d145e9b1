// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the highlight color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` flag values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the flag against `--no-color`, `NO_COLOR`, and whether stdout
    /// is a terminal.
    pub fn resolve(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                if env_no_color || !std::io::stdout().is_terminal() {
                    ColorChoice::Never
                } else {
                    resolve_color(false, no_color)
                }
            }
        }
    }
}

/// Combine a force flag with a disable flag. Disabling wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specs for each kind of output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Even-indexed matches: white on green.
    pub fn match_even() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::White)).set_bg(Some(Color::Green));
        spec
    }

    /// Odd-indexed matches: white on blue.
    pub fn match_odd() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::White)).set_bg(Some(Color::Blue));
        spec
    }

    /// Match and group indices in the match list.
    pub fn index() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Section headers.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Patterns in history listings.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Error notices.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
