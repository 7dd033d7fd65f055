// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line splitting and word extraction.
//!
//! Everything downstream sees text through these two functions. Lines are
//! `\n`-delimited slices of the original text, words are maximal runs of
//! alphabetic characters. Both hand back borrowed slices, so the index never
//! copies the corpus.
//!
//! # Invariants
//!
//! - **NO_EMPTY_LINES**: `split_lines` never yields a zero-length line. A line
//!   made of spaces or digits is still a line; it just has no words.
//! - **MAXIMAL_RUNS**: every token is bounded by a non-alphabetic character or
//!   the edge of the input on both sides.
//! - **CASE_PRESERVED**: tokens are slices, never lowercased copies.

/// Word character test. Anything else (digits, punctuation, whitespace) is a
/// delimiter and gets dropped.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Split text into its non-empty `\n`-delimited lines, in order.
///
/// Consecutive newlines don't produce a line between them, and neither does a
/// leading or trailing newline. Carriage returns are left in place.
///
/// ```
/// use lexline::split_lines;
///
/// assert_eq!(split_lines("a\n\nb\n"), vec!["a", "b"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    numbered_lines(text).map(|(_, line)| line).collect()
}

/// The lines of [`split_lines`], each paired with its 1-based line number in
/// the source text. Empty segments are skipped but still counted.
///
/// ```
/// use lexline::numbered_lines;
///
/// let lines: Vec<(usize, &str)> = numbered_lines("a\n\nb").collect();
/// assert_eq!(lines, vec![(1, "a"), (3, "b")]);
/// ```
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| (i + 1, line))
}

/// Extract the words of a text span, in order of appearance, duplicates kept.
///
/// ```
/// use lexline::tokenize;
///
/// assert_eq!(tokenize("Hello, world42again!"), vec!["Hello", "world", "again"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_token_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(&text[s..i]);
        }
    }

    // Word running into the end of the input
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}
