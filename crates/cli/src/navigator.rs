// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match navigator.
//!
//! A cyclic cursor over the current match set. Each view lays matches out at
//! its own line density, so the navigator keeps one line table per view and
//! translates the cursor into a scroll target for whichever view asks.

use std::collections::HashMap;

/// A view that can scroll to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// The full text with matches highlighted in place.
    Highlighted,
    /// The per-match list with capture groups.
    MatchList,
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Cursor over a match set, plus per-view line tables.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Option<usize>,
    count: usize,
    lines: HashMap<ViewKind, Vec<usize>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new match set: `count` matches and the line table for each
    /// view. Clears the cursor.
    pub fn load<I>(&mut self, count: usize, tables: I)
    where
        I: IntoIterator<Item = (ViewKind, Vec<usize>)>,
    {
        self.current = None;
        self.count = count;
        self.lines = tables.into_iter().collect();
    }

    /// Forget the match set and all tables.
    pub fn reset(&mut self) {
        self.current = None;
        self.count = 0;
        self.lines.clear();
    }

    /// Index of the selected match, `None` before the first step.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Select the next match, wrapping to the first. No-op without matches.
    pub fn next(&mut self) -> Option<usize> {
        self.step(Direction::Next)
    }

    /// Select the previous match, wrapping to the last. No-op without matches.
    pub fn previous(&mut self) -> Option<usize> {
        self.step(Direction::Previous)
    }

    /// Move one match in `direction` and return the new selection.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        if self.count == 0 {
            return self.current;
        }
        let next = match (self.current, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => self.count - 1,
            (Some(i), Direction::Next) if i + 1 >= self.count => 0,
            (Some(i), Direction::Next) => i + 1,
            (Some(0), Direction::Previous) => self.count - 1,
            (Some(i), Direction::Previous) => (i - 1).min(self.count - 1),
        };
        self.current = Some(next);
        self.current
    }

    /// Line of the selected match in `view`, or 0 when there is no selection
    /// or the view's table has no entry for it.
    pub fn current_line(&self, view: ViewKind) -> usize {
        self.current
            .and_then(|i| self.lines.get(&view).and_then(|table| table.get(i)))
            .copied()
            .unwrap_or(0)
    }

    /// The line table for `view`, if one was loaded.
    pub fn lines(&self, view: ViewKind) -> Option<&[usize]> {
        self.lines.get(&view).map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
