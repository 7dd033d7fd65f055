// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// Words used to generate synthetic corpora.
pub const CORPUS_WORDS: &[&str] = &[
    "rust", "search", "index", "token", "line", "query", "score", "rank", "vector", "table",
    "memory", "borrow", "lifetime", "trait", "module", "crate", "parser", "buffer", "cache",
    "thread",
];

/// Join lines into one text with `\n` separators.
pub fn corpus_from_lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Deterministic synthetic corpus: `lines` lines of `words_per_line` words.
///
/// Uses a small LCG so benches and tests see the same text on every run.
pub fn synthetic_corpus(lines: usize, words_per_line: usize) -> String {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut text = String::new();

    for line in 0..lines {
        if line > 0 {
            text.push('\n');
        }
        for word in 0..words_per_line {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let pick = (state >> 33) as usize % CORPUS_WORDS.len();
            if word > 0 {
                text.push(' ');
            }
            text.push_str(CORPUS_WORDS[pick]);
        }
    }

    text
}
