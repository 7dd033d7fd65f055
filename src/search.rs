// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: build an index over a text, then rank its lines.
//!
//! [`SearchEngine`] owns one [`RelevanceIndex`] at a time. Building replaces
//! the whole index; searching only reads it. The engine borrows the indexed
//! text for `'a`, and results are slices of that text, so nothing is copied on
//! either side.
//!
//! The engine does no locking. Share it across threads behind an `RwLock` (or
//! similar) if a build can race a search; the borrow checker already stops
//! that within one thread.

use crate::contracts::check_ranking_order;
use crate::index::RelevanceIndex;
use crate::scoring::ranking::rank_lines;
use crate::types::{IndexStats, ScoredLine};
use crate::vocabulary::Vocabulary;

/// Line-level TF-IDF search over a borrowed text.
///
/// ```
/// use lexline::SearchEngine;
///
/// let text = "cat dog\ncat cat\ndog dog";
/// let mut engine = SearchEngine::new();
/// engine.build_index(text);
///
/// assert_eq!(engine.search("cat", 10), vec!["cat cat", "cat dog"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<'a> {
    index: RelevanceIndex<'a>,
}

impl<'a> SearchEngine<'a> {
    /// An engine with nothing indexed. Every search returns empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `text`, discarding whatever was indexed before.
    pub fn build_index(&mut self, text: &'a str) {
        self.index = RelevanceIndex::build(text);
    }

    /// Up to `results_count` lines ranked by relevance to `query`.
    ///
    /// Lines scoring 0 are never returned, so the result may be shorter than
    /// `results_count`, or empty.
    pub fn search(&self, query: &str, results_count: usize) -> Vec<&'a str> {
        self.search_scored(query, results_count)
            .into_iter()
            .map(|hit| hit.text)
            .collect()
    }

    /// Same ranking as [`search`](Self::search), with positions and scores.
    pub fn search_scored(&self, query: &str, results_count: usize) -> Vec<ScoredLine<'a>> {
        if results_count == 0 || self.index.line_count() == 0 {
            return Vec::new();
        }

        let mut scores = self.index.score_query(query);
        let scored_lines = scores.len();
        rank_lines(&mut scores);
        check_ranking_order(&scores);

        let hits: Vec<ScoredLine<'a>> = scores
            .into_iter()
            .take(results_count)
            .take_while(|s| s.score != 0.0)
            .filter_map(|s| {
                self.index.line(s.line).map(|text| ScoredLine {
                    line: s.line,
                    score: s.score,
                    text,
                })
            })
            .collect();

        tracing::trace!(
            query,
            scored_lines,
            returned = hits.len(),
            "ranked query"
        );

        hits
    }

    pub fn index(&self) -> &RelevanceIndex<'a> {
        &self.index
    }

    pub fn lines(&self) -> &[&'a str] {
        self.index.lines()
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// 1-based line number of line `pos` in the indexed text.
    pub fn source_line(&self, pos: usize) -> Option<usize> {
        self.index.source_line(pos)
    }

    pub fn is_ignored(&self, pos: usize) -> bool {
        self.index.is_ignored(pos)
    }

    pub fn ignored_count(&self) -> usize {
        self.index.ignored_count()
    }

    pub fn vocabulary(&self) -> &Vocabulary<'a> {
        self.index.vocabulary()
    }

    pub fn relevance(&self, term: &str, pos: usize) -> f64 {
        self.index.relevance(term, pos)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
