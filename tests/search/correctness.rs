//! TF-IDF values and which lines come back.

use crate::common::{approx_eq, assert_index_well_formed, build_engine, PETS};

#[test]
fn test_cat_query_ranks_by_term_frequency() {
    let engine = build_engine(PETS);
    // "cat cat" has tf 1.0, "cat dog" has tf 0.5, "dog dog" has none
    assert_eq!(engine.search("cat", 10), vec!["cat cat", "cat dog"]);
}

#[test]
fn test_dog_query_mirrors_cat() {
    let engine = build_engine(PETS);
    assert_eq!(engine.search("dog", 10), vec!["dog dog", "cat dog"]);
}

#[test]
fn test_scores_match_formula() {
    let engine = build_engine(PETS);
    let idf = (3.0f64 / 2.0).ln();
    let hits = engine.search_scored("cat", 10);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].line, 1);
    assert!(approx_eq(hits[0].score, idf));
    assert_eq!(hits[1].line, 0);
    assert!(approx_eq(hits[1].score, 0.5 * idf));
}

#[test]
fn test_multi_term_query_sums_scores() {
    let engine = build_engine(PETS);
    let idf = (3.0f64 / 2.0).ln();
    let hits = engine.search_scored("cat dog", 10);

    // Every line scores idf: 0.5+0.5, 1.0+0, 0+1.0; ties go to later lines
    let lines: Vec<usize> = hits.iter().map(|h| h.line).collect();
    assert_eq!(lines, vec![2, 1, 0]);
    assert!(hits.iter().all(|h| approx_eq(h.score, idf)));
}

#[test]
fn test_repeated_query_terms_count_once() {
    let engine = build_engine(PETS);
    assert_eq!(
        engine.search_scored("cat cat CAT", 10),
        engine.search_scored("cat", 10)
    );
}

#[test]
fn test_query_punctuation_is_ignored() {
    let engine = build_engine(PETS);
    assert_eq!(engine.search("...cat?!", 10), engine.search("cat", 10));
}

#[test]
fn test_uppercase_query_matches_lowercase_query() {
    let engine = build_engine(PETS);
    assert_eq!(engine.search_scored("CAT", 10), engine.search_scored("cat", 10));
}

#[test]
fn test_mixed_case_corpus() {
    let engine = build_engine("Rust is fast\nrust RUST\nGo is fine");
    assert_eq!(engine.search("rust", 10), vec!["rust RUST", "Rust is fast"]);
    assert_eq!(engine.vocabulary().len(), 5);
}

#[test]
fn test_unknown_term_contributes_nothing() {
    let engine = build_engine(PETS);
    assert!(engine.search("zebra", 10).is_empty());
    assert_eq!(
        engine.search_scored("cat zebra", 10),
        engine.search_scored("cat", 10)
    );
}

#[test]
fn test_term_in_every_line_never_matches() {
    let engine = build_engine("the cat\nthe dog\nthe bird");
    assert!(engine.search("the", 10).is_empty());
    assert_eq!(engine.search("the bird", 10), vec!["the bird"]);
}

#[test]
fn test_rare_term_outranks_common_term() {
    let engine = build_engine("apple banana\napple cherry\napple banana\ndurian cherry");
    // banana: df 2; durian: df 1 -> durian line wins a tie on tf
    let hits = engine.search("banana durian", 10);
    assert_eq!(hits[0], "durian cherry");
}

#[test]
fn test_returns_original_line_text() {
    let engine = build_engine("  Hello, World!  \nbye");
    assert_eq!(engine.search("hello", 1), vec!["  Hello, World!  "]);
}

#[test]
fn test_index_well_formed_on_mixed_input() {
    let engine = build_engine("one two\n\n  \n3 4 5\nTwo three\n...\none");
    assert_index_well_formed(&engine);
    // "  ", "3 4 5" and "..." are lines without words
    assert_eq!(engine.line_count(), 6);
    assert_eq!(engine.ignored_count(), 3);
}
