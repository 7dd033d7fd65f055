// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The small value types that flow out of the index.
//!
//! Lines are identified by their 0-based position among the non-empty lines
//! of the indexed text. Positions are stable for the lifetime of an index and
//! are what the tie-break compares.
//!
//! # Invariants
//!
//! - **LineScore**: `line < line_count ∧ score >= 0 ∧ score.is_finite()`
//! - **ScoredLine**: `text` is the line at position `line`, borrowed from the
//!   indexed text.

use serde::Serialize;

/// A line position paired with its summed query score.
///
/// This is the unit the ranker sorts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineScore {
    pub line: usize,
    pub score: f64,
}

/// A ranked search hit: where the line is, what it scored, and its text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredLine<'a> {
    pub line: usize,
    pub score: f64,
    pub text: &'a str,
}

/// Summary counts for a built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Non-empty lines, wordless ones included.
    pub lines: usize,
    /// Lines with no words. Present in `lines`, never searched.
    pub ignored_lines: usize,
    pub vocabulary_size: usize,
    /// Byte length of the indexed text.
    pub text_bytes: usize,
}

impl IndexStats {
    /// Lines that actually take part in scoring.
    pub fn indexed_lines(&self) -> usize {
        self.lines - self.ignored_lines
    }
}
