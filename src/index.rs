// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance index construction.
//!
//! The index is a dense table: for every vocabulary term, one TF-IDF score per
//! line. Dense because lookups at query time are then a plain slice index by
//! line position, and because the corpora this is meant for are small.
//!
//! Rows are kept in vocabulary order and found by binary search with
//! [`compare_terms`], so a query token of any lifetime can look up a row
//! borrowed from the index.
//!
//! # Invariants (DO NOT VIOLATE)
//!
//! 1. **TABLE_ALIGNED**: every score vector has exactly `lines.len()` entries,
//!    and entry `i` belongs to line `i`.
//! 2. **IGNORED_ZERO**: a wordless line has 0 in every vector.
//! 3. **VOCAB_SORTED**: the vocabulary and the table rows are in ascending
//!    case-insensitive order (guaranteed by `Term`'s `Ord`).
//! 4. **NON_NEGATIVE**: every score is finite and `>= 0`.
//!
//! See `contracts.rs` for the debug-build checks.

use crate::contracts::check_index_well_formed;
use crate::scoring::{inverse_document_frequency, term_frequency};
use crate::tokenize::{numbered_lines, tokenize};
use crate::types::{IndexStats, LineScore};
use crate::vocabulary::{compare_terms, Term, Vocabulary};
use std::collections::{BTreeMap, BTreeSet};

/// A built, read-only TF-IDF table over the lines of one text.
#[derive(Debug, Clone, Default)]
pub struct RelevanceIndex<'a> {
    text_bytes: usize,
    lines: Vec<&'a str>,
    /// 1-based source line number of each line, by position.
    line_numbers: Vec<usize>,
    ignored: BTreeSet<usize>,
    vocabulary: Vocabulary<'a>,
    /// One row per vocabulary term, in vocabulary order.
    table: Vec<(Term<'a>, Vec<f64>)>,
}

impl<'a> RelevanceIndex<'a> {
    /// Index `text` from scratch.
    ///
    /// Never fails. Empty text gives an index with no lines and no terms.
    pub fn build(text: &'a str) -> Self {
        let (line_numbers, lines): (Vec<usize>, Vec<&'a str>) = numbered_lines(text).unzip();
        let line_tokens: Vec<Vec<&'a str>> = lines.iter().map(|&line| tokenize(line)).collect();

        let ignored: BTreeSet<usize> = line_tokens
            .iter()
            .enumerate()
            .filter(|(_, tokens)| tokens.is_empty())
            .map(|(pos, _)| pos)
            .collect();

        let vocabulary = Vocabulary::from_text(text);

        // INVARIANT: TABLE_ALIGNED - one slot per line, ignored lines stay 0
        let mut table: Vec<(Term<'a>, Vec<f64>)> = vocabulary
            .iter()
            .map(|term| (term, vec![0.0; lines.len()]))
            .collect();
        let rows: BTreeMap<Term<'a>, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(row, term)| (term, row))
            .collect();
        let mut doc_freq = vec![0usize; table.len()];

        // Term frequencies
        for (pos, tokens) in line_tokens.iter().enumerate() {
            if tokens.is_empty() {
                continue;
            }

            let mut counts: BTreeMap<Term<'a>, usize> = BTreeMap::new();
            for &token in tokens {
                *counts.entry(Term::new(token)).or_default() += 1;
            }

            for (term, count) in counts {
                if let Some(&row) = rows.get(&term) {
                    table[row].1[pos] = term_frequency(count, tokens.len());
                    doc_freq[row] += 1;
                }
            }
        }

        // Scale by inverse document frequency
        for ((_, scores), &df) in table.iter_mut().zip(&doc_freq) {
            let idf = inverse_document_frequency(lines.len(), df);
            for score in scores.iter_mut() {
                *score *= idf;
            }
        }

        let index = RelevanceIndex {
            text_bytes: text.len(),
            lines,
            line_numbers,
            ignored,
            vocabulary,
            table,
        };

        check_index_well_formed(&index);

        tracing::debug!(
            lines = index.lines.len(),
            ignored = index.ignored.len(),
            terms = index.vocabulary.len(),
            "built relevance index"
        );

        index
    }

    /// All non-empty lines, by position.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The text of line `pos`, if it exists.
    pub fn line(&self, pos: usize) -> Option<&'a str> {
        self.lines.get(pos).copied()
    }

    /// Where line `pos` sits in the source text, counting empty lines.
    pub fn source_line(&self, pos: usize) -> Option<usize> {
        self.line_numbers.get(pos).copied()
    }

    /// True for wordless lines. Out-of-range positions are not ignored lines.
    pub fn is_ignored(&self, pos: usize) -> bool {
        self.ignored.contains(&pos)
    }

    pub fn ignored_count(&self) -> usize {
        self.ignored.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary<'a> {
        &self.vocabulary
    }

    /// Per-line scores for a term, looked up case-insensitively.
    pub fn scores(&self, term: &str) -> Option<&[f64]> {
        self.table
            .binary_search_by(|(key, _)| compare_terms(key.as_str(), term))
            .ok()
            .map(|row| self.table[row].1.as_slice())
    }

    /// Iterate the table in vocabulary order.
    pub fn table(&self) -> impl Iterator<Item = (Term<'a>, &[f64])> + '_ {
        self.table
            .iter()
            .map(|(term, scores)| (*term, scores.as_slice()))
    }

    /// TF-IDF score of `term` on line `pos`; 0 for unknown terms or positions.
    pub fn relevance(&self, term: &str, pos: usize) -> f64 {
        self.scores(term)
            .and_then(|scores| scores.get(pos).copied())
            .unwrap_or(0.0)
    }

    /// Score every non-ignored line against a query.
    ///
    /// The query is reduced to its unique terms first, so repeating a word in
    /// the query doesn't count it twice. Terms outside the vocabulary add
    /// nothing. Output is in line order, unranked.
    pub fn score_query(&self, query: &str) -> Vec<LineScore> {
        let query_terms = Vocabulary::from_text(query);
        let vectors: Vec<&[f64]> = query_terms
            .iter()
            .filter_map(|term| self.scores(term.as_str()))
            .collect();

        (0..self.lines.len())
            .filter(|pos| !self.ignored.contains(pos))
            .map(|pos| LineScore {
                line: pos,
                score: vectors.iter().map(|scores| scores[pos]).sum(),
            })
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.lines.len(),
            ignored_lines: self.ignored.len(),
            vocabulary_size: self.vocabulary.len(),
            text_bytes: self.text_bytes,
        }
    }
}
