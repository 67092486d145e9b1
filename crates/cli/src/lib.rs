// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regexplore library.
//!
//! Evaluates a regular expression against text and derives the views a
//! workbench needs: highlighted segments, a match list, a navigation cursor,
//! exports, and a persistent pattern history.

pub mod cheatsheet;
pub mod cli;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod destination;
pub mod engine;
pub mod error;
pub mod export;
pub mod highlight;
pub mod history;
pub mod input;
pub mod listing;
pub mod logging;
pub mod navigator;
pub mod session;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode, Result};
