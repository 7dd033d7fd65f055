//! Index invariants under random input.
//!
//! - Every score vector is aligned to the line count
//! - Ignored lines score zero and are never returned
//! - Scores agree with the naive oracle
//! - Lookups ignore case

use crate::common::{assert_index_well_formed, build_engine};
use crate::oracles::oracle_scores;
use lexline::{compare_terms, split_lines, tokenize, SearchEngine};
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words from a tiny alphabet so terms repeat across lines.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,3}").unwrap()
}

/// A line: words separated by junk, sometimes no words at all.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::collection::vec(word_strategy(), 1..6).prop_map(|w| w.join(" ")),
        1 => prop::string::string_regex("[ 0-9.,]{0,4}").unwrap(),
    ]
}

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..10).prop_map(|lines| lines.join("\n"))
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..4).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the table is aligned and ignored lines are zero.
    #[test]
    fn prop_index_well_formed(text in corpus_strategy()) {
        let engine = build_engine(&text);
        assert_index_well_formed(&engine);
    }

    /// Property: lines are exactly the non-empty `\n` segments.
    #[test]
    fn prop_lines_are_non_empty_segments(text in corpus_strategy()) {
        let engine = build_engine(&text);
        let expected: Vec<&str> = text.split('\n').filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(engine.lines(), expected.as_slice());
        prop_assert_eq!(split_lines(&text), expected);
    }

    /// Property: a line is ignored iff it has no words.
    #[test]
    fn prop_ignored_iff_wordless(text in corpus_strategy()) {
        let engine = build_engine(&text);
        for (pos, line) in engine.lines().iter().enumerate() {
            prop_assert_eq!(engine.is_ignored(pos), tokenize(line).is_empty());
        }
    }

    /// Property: summed scores match the oracle for every line.
    #[test]
    fn prop_scores_match_oracle(text in corpus_strategy(), query in query_strategy()) {
        let engine = build_engine(&text);
        let expected = oracle_scores(&text, &query);
        let actual = engine.index().score_query(&query);

        let mut actual_iter = actual.iter();
        for (pos, oracle) in expected.iter().enumerate() {
            match oracle {
                None => prop_assert!(engine.is_ignored(pos)),
                Some(score) => {
                    let got = actual_iter.next().expect("missing scored line");
                    prop_assert_eq!(got.line, pos);
                    prop_assert!(
                        (got.score - score).abs() < 1e-9,
                        "line {}: got {}, oracle {}", pos, got.score, score
                    );
                }
            }
        }
        prop_assert!(actual_iter.next().is_none());
    }

    /// Property: the vocabulary is strictly ascending case-insensitively.
    #[test]
    fn prop_vocabulary_sorted(text in corpus_strategy()) {
        let engine = build_engine(&text);
        let terms: Vec<&str> = engine.vocabulary().iter().map(|t| t.as_str()).collect();
        for pair in terms.windows(2) {
            prop_assert_eq!(compare_terms(pair[0], pair[1]), Ordering::Less);
        }
    }

    /// Property: query case never changes results.
    #[test]
    fn prop_query_case_insensitive(text in corpus_strategy(), query in query_strategy()) {
        let engine = build_engine(&text);
        prop_assert_eq!(
            engine.search_scored(&query.to_uppercase(), 10),
            engine.search_scored(&query.to_lowercase(), 10)
        );
    }

    /// Property: a term absent from the corpus adds nothing.
    #[test]
    fn prop_unknown_term_adds_nothing(text in corpus_strategy(), query in query_strategy()) {
        let engine = build_engine(&text);
        // The corpus alphabet is a-c, so "zzz" never occurs
        let padded = format!("{} zzz", query);
        prop_assert_eq!(engine.search_scored(&padded, 10), engine.search_scored(&query, 10));
    }

    /// Property: indexing the same text twice gives the same results.
    #[test]
    fn prop_rebuild_idempotent(text in corpus_strategy(), query in query_strategy()) {
        let mut engine = SearchEngine::new();
        engine.build_index(&text);
        let first = engine.search_scored(&query, 10);
        engine.build_index(&text);
        prop_assert_eq!(engine.search_scored(&query, 10), first);
    }
}
