//! Empty inputs, ignored lines and engine lifecycle.

use crate::common::build_engine;
use lexline::SearchEngine;

#[test]
fn test_search_before_any_build() {
    let engine = SearchEngine::new();
    assert!(engine.search("cat", 5).is_empty());
    assert_eq!(engine.line_count(), 0);
}

#[test]
fn test_empty_text() {
    let engine = build_engine("");
    assert!(engine.search("cat", 5).is_empty());
    assert!(engine.vocabulary().is_empty());
    assert_eq!(engine.stats().lines, 0);
}

#[test]
fn test_text_without_words() {
    for text in ["\n\n\n", "   ", "123 456\n7.8.9", "!!!\n???"] {
        let engine = build_engine(text);
        assert!(engine.search("a", 5).is_empty(), "text {:?}", text);
        assert!(engine.vocabulary().is_empty());
    }
}

#[test]
fn test_empty_query() {
    let engine = build_engine("cat\ndog");
    assert!(engine.search("", 5).is_empty());
    assert!(engine.search("  42 ", 5).is_empty());
}

#[test]
fn test_zero_results_requested() {
    let engine = build_engine("cat\ndog");
    assert!(engine.search("cat", 0).is_empty());
}

#[test]
fn test_empty_middle_line_keeps_numbering() {
    let engine = build_engine("a\n\nb");
    assert_eq!(engine.lines(), &["a", "b"]);
    assert_eq!(engine.ignored_count(), 0);
    // a at 0, b at 1: equal scores, b first
    assert_eq!(engine.search("a b", 5), vec!["b", "a"]);
}

#[test]
fn test_wordless_line_is_never_returned() {
    let engine = build_engine("cat\n 123 \ncat dog");
    assert!(engine.is_ignored(1));
    let hits = engine.search_scored("cat dog", 10);
    assert!(hits.iter().all(|h| h.line != 1));
    assert!(hits.iter().all(|h| h.text != " 123 "));
}

#[test]
fn test_wordless_line_counts_toward_idf() {
    // Two lines with words plus one without: idf = ln(3/1), not ln(2/1)
    let engine = build_engine("cat\n---\ndog");
    assert!((engine.relevance("cat", 0) - 3.0f64.ln()).abs() < 1e-12);
}

#[test]
fn test_rebuild_with_identical_text_is_idempotent() {
    let text = "red green\nblue\ngreen green blue";
    let mut engine = SearchEngine::new();
    engine.build_index(text);
    let first = engine.search_scored("green blue", 10);
    engine.build_index(text);
    assert_eq!(engine.search_scored("green blue", 10), first);
}

#[test]
fn test_rebuild_replaces_everything() {
    let mut engine = SearchEngine::new();
    engine.build_index("one\n\n---\ntwo");
    assert_eq!(engine.ignored_count(), 1);

    engine.build_index("three");
    assert_eq!(engine.line_count(), 1);
    assert_eq!(engine.ignored_count(), 0);
    assert!(!engine.vocabulary().contains("one"));
}

#[test]
fn test_trailing_newline_adds_no_line() {
    let engine = build_engine("cat\ndog\n");
    assert_eq!(engine.line_count(), 2);
}

#[test]
fn test_carriage_returns_stay_in_line_text() {
    let engine = build_engine("cat\r\ndog\r\n");
    assert_eq!(engine.search("cat", 1), vec!["cat\r"]);
}
