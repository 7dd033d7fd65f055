// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the relevance index and the ranker.
//!
//! These are debug-mode assertions over the invariants documented in
//! `index.rs` and `scoring/ranking.rs`. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Catch alignment bugs at build time instead of as wrong search results
//!
//! | Contract Function              | Invariant                           |
//! |--------------------------------|-------------------------------------|
//! | `check_table_aligned`          | TABLE_ALIGNED (index.rs)            |
//! | `check_ignored_lines_zero`     | IGNORED_ZERO (index.rs)             |
//! | `check_vocabulary_sorted`      | VOCAB_SORTED (index.rs)             |
//! | `check_scores_non_negative`    | NON_NEGATIVE (index.rs)             |
//! | `check_ranking_order`          | ranking order (ranking.rs)          |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // Tie window must exist, and must be far below any real score gap
    assert!(SCORE_EPSILON > 0.0);
    assert!(SCORE_EPSILON < 1e-6);
};

use crate::index::RelevanceIndex;
use crate::scoring::SCORE_EPSILON;
use crate::types::LineScore;
use crate::vocabulary::compare_terms;
use std::cmp::Ordering;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Every score vector has one entry per line.
///
/// # Panics (debug builds only)
/// Panics if any vector length differs from `line_count()`.
#[inline]
pub fn check_table_aligned(index: &RelevanceIndex<'_>) {
    for (term, scores) in index.table() {
        debug_assert_eq!(
            scores.len(),
            index.line_count(),
            "Contract violation: TABLE_ALIGNED - scores[{}].len() {} != line_count {}",
            term,
            scores.len(),
            index.line_count()
        );
    }
}

/// Wordless lines score 0 for every term.
#[inline]
pub fn check_ignored_lines_zero(index: &RelevanceIndex<'_>) {
    for (term, scores) in index.table() {
        for (pos, &score) in scores.iter().enumerate() {
            if index.is_ignored(pos) {
                debug_assert!(
                    score == 0.0,
                    "Contract violation: IGNORED_ZERO - scores[{}][{}] = {} on ignored line",
                    term,
                    pos,
                    score
                );
            }
        }
    }
}

/// Vocabulary is strictly ascending under the case-insensitive order.
#[inline]
pub fn check_vocabulary_sorted(index: &RelevanceIndex<'_>) {
    let terms: Vec<&str> = index.vocabulary().iter().map(|t| t.as_str()).collect();
    for pair in terms.windows(2) {
        debug_assert!(
            compare_terms(pair[0], pair[1]) == Ordering::Less,
            "Contract violation: VOCAB_SORTED - '{}' does not sort before '{}'",
            pair[0],
            pair[1]
        );
    }
}

/// Scores are finite and non-negative.
#[inline]
pub fn check_scores_non_negative(index: &RelevanceIndex<'_>) {
    for (term, scores) in index.table() {
        for (pos, &score) in scores.iter().enumerate() {
            debug_assert!(
                score.is_finite() && score >= 0.0,
                "Contract violation: NON_NEGATIVE - scores[{}][{}] = {}",
                term,
                pos,
                score
            );
        }
    }
}

/// All index contracts. Called at the end of every build.
#[inline]
pub fn check_index_well_formed(index: &RelevanceIndex<'_>) {
    if cfg!(debug_assertions) {
        check_table_aligned(index);
        check_ignored_lines_zero(index);
        check_vocabulary_sorted(index);
        check_scores_non_negative(index);
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// No ranked score exceeds any score ranked above it by [`SCORE_EPSILON`] or
/// more, and exactly equal neighbours are in descending line order.
///
/// Ties are resolved within runs anchored to their highest score, so two
/// near-equal neighbours from different runs may legitimately be in
/// ascending line order. Only exact equality pins the tie-break.
#[inline]
pub fn check_ranking_order(ranked: &[LineScore]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut floor = f64::INFINITY;
    for curr in ranked {
        debug_assert!(
            curr.score < floor + SCORE_EPSILON,
            "Contract violation: ranking - line {} ({}) ranked below a score of {}",
            curr.line,
            curr.score,
            floor
        );
        floor = floor.min(curr.score);
    }

    for pair in ranked.windows(2) {
        if pair[0].score == pair[1].score {
            debug_assert!(
                pair[0].line > pair[1].line,
                "Contract violation: ranking tie-break - line {} before line {}",
                pair[0].line,
                pair[1].line
            );
        }
    }
}
