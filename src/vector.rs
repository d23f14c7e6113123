//! Character n-gram count vectors.
//!
//! A string is turned into a sparse bag of its length-`n` substrings. Windows
//! are measured in chars, so multi-byte text is never split inside a code
//! point. Any window that contains a space (`' '`) is dropped, which keeps
//! n-grams from bridging two words. Tabs, newlines and other whitespace are
//! ordinary chars.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::SimilarityError;

/// N-gram size used when the caller does not choose one.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Sparse count vector over the n-grams of a single string.
///
/// Keys are unique n-grams of exactly [`NgramVector::n`] chars; values are
/// occurrence counts and are always at least 1. The vector cannot be mutated
/// once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NgramVector {
    n: usize,
    counts: BTreeMap<String, usize>,
}

impl NgramVector {
    /// Vectorize `text` with [`DEFAULT_NGRAM_SIZE`].
    pub fn from_text(text: &str) -> Self {
        Self::build(text, DEFAULT_NGRAM_SIZE)
    }

    /// The n-gram size this vector was built with.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `gram`, or `None` when it never occurs.
    pub fn get(&self, gram: &str) -> Option<usize> {
        self.counts.get(gram).copied()
    }

    pub fn contains(&self, gram: &str) -> bool {
        self.counts.contains_key(gram)
    }

    /// Sum of all counts, i.e. the number of n-gram windows kept.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct n-grams in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(n-gram, count)` pairs in lexicographic order of the n-gram.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(gram, &count)| (gram.as_str(), count))
    }

    /// Sliding-window construction; `n` must already be known to be >= 1.
    pub(crate) fn build(text: &str, n: usize) -> Self {
        debug_assert!(n >= 1);
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        // Byte offset of every char start, followed by the end of the string.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = bounds.len() - 1;

        if char_len >= n {
            for start in 0..=(char_len - n) {
                let gram = &text[bounds[start]..bounds[start + n]];
                if gram.contains(' ') {
                    continue;
                }
                match counts.get_mut(gram) {
                    Some(count) => *count += 1,
                    None => {
                        counts.insert(gram.to_owned(), 1);
                    }
                }
            }
        }

        Self { n, counts }
    }
}

/// Build the n-gram count vector of `text`.
///
/// Every contiguous window of `n` chars is counted unless it contains a
/// space (`' '`). Text shorter than `n` yields an empty vector. No case or
/// punctuation normalization is applied; callers clean their input first.
///
/// # Errors
///
/// Returns [`SimilarityError::InvalidNgramSize`] when `n` is zero.
///
/// ```
/// use ngram_match::text_to_ngrams_vector;
///
/// let vec = text_to_ngrams_vector("banana", 2).unwrap();
/// assert_eq!(vec.get("an"), Some(2));
/// assert_eq!(vec.get("na"), Some(2));
/// assert_eq!(vec.get("ba"), Some(1));
/// assert_eq!(vec.len(), 3);
/// ```
pub fn text_to_ngrams_vector(text: &str, n: usize) -> Result<NgramVector, SimilarityError> {
    if n == 0 {
        return Err(SimilarityError::InvalidNgramSize { n });
    }
    Ok(NgramVector::build(text, n))
}
