// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored lines get sorted.
//!
//! Higher score first. Scores within [`SCORE_EPSILON`](crate::SCORE_EPSILON)
//! of each other are a tie, and ties go to the line that appears later in the
//! text.
//!
//! An epsilon comparator is not transitive (a ≈ b and b ≈ c doesn't give
//! a ≈ c), and `sort_by` is allowed to panic on comparators that aren't a
//! total order. So ranking is two passes: a total-order sort on the exact
//! score, then a pass that groups scores into tie runs and reorders each run
//! by position.
//!
//! A run is anchored to its first (highest) score: every member is within
//! epsilon of the head, so no run spans more than one epsilon. A line never
//! ranks below one that scores more than epsilon less than it.

use crate::scoring::core::scores_tie;
use crate::types::LineScore;
use std::cmp::Ordering;

/// Exact ordering used for the first pass.
///
/// Sort order:
/// 1. **Score** - descending, by `f64::total_cmp`
/// 2. **Line** - descending, later lines first
pub fn compare_scores(a: &LineScore, b: &LineScore) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => b.line.cmp(&a.line),
        ord => ord,
    }
}

/// Sort scored lines into final ranking order, in place.
///
/// ```
/// use lexline::{rank_lines, LineScore};
///
/// let mut scores = vec![
///     LineScore { line: 0, score: 0.5 },
///     LineScore { line: 1, score: 0.9 },
///     LineScore { line: 2, score: 0.5 },
/// ];
/// rank_lines(&mut scores);
/// let order: Vec<usize> = scores.iter().map(|s| s.line).collect();
/// assert_eq!(order, vec![1, 2, 0]);
/// ```
pub fn rank_lines(scores: &mut [LineScore]) {
    scores.sort_by(compare_scores);

    let mut start = 0;
    while start < scores.len() {
        let mut end = start + 1;
        while end < scores.len() && scores_tie(scores[start].score, scores[end].score) {
            end += 1;
        }
        if end - start > 1 {
            scores[start..end].sort_by(|a, b| b.line.cmp(&a.line));
        }
        start = end;
    }
}
