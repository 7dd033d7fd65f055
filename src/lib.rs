// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory, line-level TF-IDF text search.
//!
//! Index a text once, then ask for the lines most relevant to a free-text
//! query. Each line is a document; words are alphabetic runs compared without
//! regard to case.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│ vocabulary.rs │────▶│   index.rs   │────▶│  search.rs  │
//! │ (lines,     │     │ (Term, case-  │     │ (TF-IDF      │     │ (rank, top  │
//! │  words)     │     │  free order)  │     │  table)      │     │  N lines)   │
//! └─────────────┘     └───────────────┘     └──────────────┘     └─────────────┘
//!                                                  │                    │
//!                                                  ▼                    ▼
//!                                         ┌────────────────────────────────────┐
//!                                         │  scoring/ (tf, idf, tie-break)      │
//!                                         │  contracts.rs (debug invariants)    │
//!                                         └────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lexline::SearchEngine;
//!
//! let text = String::from("the quick fox\nthe lazy dog\nquick quick");
//! let mut engine = SearchEngine::new();
//! engine.build_index(&text);
//!
//! let hits = engine.search("QUICK", 5);
//! assert_eq!(hits, vec!["quick quick", "the quick fox"]);
//! ```

pub mod contracts;
mod index;
mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;
mod vocabulary;

// Re-exports for public API
pub use index::RelevanceIndex;
pub use scoring::ranking::{compare_scores, rank_lines};
pub use scoring::{inverse_document_frequency, scores_tie, term_frequency, SCORE_EPSILON};
pub use search::SearchEngine;
pub use tokenize::{is_token_char, numbered_lines, split_lines, tokenize};
pub use types::{IndexStats, LineScore, ScoredLine};
pub use vocabulary::{compare_terms, Term, Vocabulary};
