// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The TF-IDF arithmetic.
//!
//! A line's relevance for a term is `tf × idf`:
//!
//! ```text
//! tf(term, line) = occurrences of term in line / tokens in line
//! idf(term)      = ln(total lines / lines containing term)
//! ```
//!
//! Occurrences are raw counts, so a word repeated twice counts twice. The line
//! total in `idf` includes wordless lines, which makes every idf slightly larger
//! than it would be over indexed lines alone. Both factors are non-negative,
//! so every relevance score is too.
//!
//! # Key Invariant: Non-negative Scores
//!
//! `doc_freq <= line_count` always holds for a well-formed index, so the log
//! argument is at least 1 and `idf >= 0`. A term found in every line has
//! `idf = 0` and can never lift one line above another.

/// Two line scores closer than this are treated as equal when ranking.
///
/// Sums of the same products in different orders drift by a few ULPs; this
/// absorbs that without merging genuinely different scores.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Term frequency of a term that occurs `count` times in a line of
/// `line_tokens` tokens.
///
/// Returns 0 for a line with no tokens instead of dividing by zero.
pub fn term_frequency(count: usize, line_tokens: usize) -> f64 {
    if line_tokens == 0 {
        return 0.0;
    }
    count as f64 / line_tokens as f64
}

/// Inverse document frequency of a term present in `doc_freq` of `line_count`
/// lines.
///
/// A term that appears nowhere gets 0, not infinity.
pub fn inverse_document_frequency(line_count: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }
    (line_count as f64 / doc_freq as f64).ln()
}

/// True when two scores are within [`SCORE_EPSILON`] of each other.
#[inline]
pub fn scores_tie(a: f64, b: f64) -> bool {
    (a - b).abs() < SCORE_EPSILON
}
