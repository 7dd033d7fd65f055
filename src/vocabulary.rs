// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive terms and the ordered vocabulary built from them.
//!
//! A [`Term`] is a borrowed token whose equality and ordering ignore case, so
//! `"Cat"`, `"cat"` and `"CAT"` are one term. The stored slice keeps whatever
//! casing it was first seen with. [`Vocabulary`] is just a `BTreeSet<Term>`;
//! the set does the dedup and the ordering through `Term`'s `Ord`.
//!
//! Query terms go through the same type, which is what lets a query for
//! `"CAT"` find the relevance vector stored under `"cat"`.

use crate::tokenize::tokenize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Compare two tokens ignoring case, one codepoint at a time.
///
/// Each character is lowercased before comparing. When one token is a prefix
/// of the other (after folding), the shorter one sorts first.
///
/// ```
/// use lexline::compare_terms;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_terms("Apple", "apple"), Ordering::Equal);
/// assert_eq!(compare_terms("app", "APPLE"), Ordering::Less);
/// assert_eq!(compare_terms("b", "A"), Ordering::Greater);
/// ```
pub fn compare_terms(lhs: &str, rhs: &str) -> Ordering {
    lhs.chars()
        .flat_map(char::to_lowercase)
        .cmp(rhs.chars().flat_map(char::to_lowercase))
}

/// A token compared case-insensitively. See [`compare_terms`].
#[derive(Clone, Copy)]
pub struct Term<'a>(&'a str);

impl<'a> Term<'a> {
    pub fn new(token: &'a str) -> Self {
        Term(token)
    }

    /// The token as it appeared in the source text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Term<'_> {}

impl PartialOrd for Term<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(self.0, other.0)
    }
}

impl fmt::Debug for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({:?})", self.0)
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'a> From<&'a str> for Term<'a> {
    fn from(token: &'a str) -> Self {
        Term(token)
    }
}

/// The unique terms of a text span, in case-insensitive order.
///
/// Built in one shot and never edited afterwards; reindexing builds a new one.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    terms: BTreeSet<Term<'a>>,
}

impl<'a> Vocabulary<'a> {
    /// Collect the unique terms of `text`.
    ///
    /// The first spelling seen for a term is the one kept.
    ///
    /// ```
    /// use lexline::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_text("Dog cat dog CAT bird");
    /// let terms: Vec<&str> = vocab.iter().map(|t| t.as_str()).collect();
    /// assert_eq!(terms, vec!["bird", "cat", "Dog"]);
    /// ```
    pub fn from_text(text: &'a str) -> Self {
        let mut terms = BTreeSet::new();
        for token in tokenize(text) {
            // BTreeSet::insert leaves an existing equal element in place
            terms.insert(Term(token));
        }
        Vocabulary { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(&Term(token))
    }

    /// Terms in ascending case-insensitive order.
    pub fn iter(&self) -> impl Iterator<Item = Term<'a>> + '_ {
        self.terms.iter().copied()
    }
}

impl<'a, 'v> IntoIterator for &'v Vocabulary<'a> {
    type Item = &'v Term<'a>;
    type IntoIter = std::collections::btree_set::Iter<'v, Term<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
