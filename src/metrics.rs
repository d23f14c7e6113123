//! Similarity metrics over [`NgramVector`]s.
//!
//! Both metrics are pure, symmetric and bounded to `[0.0, 1.0]`. An empty
//! vector on either side scores `0.0` instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::vector::{NgramVector, text_to_ngrams_vector};

/// Jaccard index of the two key sets: `|A ∩ B| / |A ∪ B|`.
///
/// Only key presence matters; counts are ignored. Two empty vectors score
/// `0.0`.
pub fn jaccard_index(vec1: &NgramVector, vec2: &NgramVector) -> f64 {
    let (small, large) = by_len(vec1, vec2);
    let intersection = small.keys().filter(|gram| large.contains(gram)).count();
    let union = vec1.len() + vec2.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Cosine of the angle between the two count vectors.
///
/// The dot product runs over shared n-grams; each norm runs over the full
/// vector. Returns `0.0` when either vector is empty.
///
/// Scores on an exact cutoff boundary can differ in the last bit from
/// `dot / (sqrt(Σa²) * sqrt(Σb²))`; `"abc"` vs `"bcd"` is exactly `0.5` here.
pub fn cosine_similar(vec1: &NgramVector, vec2: &NgramVector) -> f64 {
    let (small, large) = by_len(vec1, vec2);
    let dot: f64 = small
        .iter()
        .filter_map(|(gram, count)| large.get(gram).map(|other| count as f64 * other as f64))
        .sum();

    // sqrt(a * b) rather than sqrt(a) * sqrt(b) keeps cos(v, v) exactly 1.0.
    let denominator = (squared_norm(vec1) * squared_norm(vec2)).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}

fn squared_norm(vec: &NgramVector) -> f64 {
    vec.iter().map(|(_, count)| (count as f64).powi(2)).sum()
}

fn by_len<'v>(a: &'v NgramVector, b: &'v NgramVector) -> (&'v NgramVector, &'v NgramVector) {
    if a.len() <= b.len() { (a, b) } else { (b, a) }
}

/// Identifier for the metric used to score a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// [`cosine_similar`]; weighs repeated n-grams.
    #[default]
    Cosine,
    /// [`jaccard_index`]; key presence only.
    Jaccard,
}

impl Metric {
    /// Score two vectors with this metric.
    pub fn score(self, vec1: &NgramVector, vec2: &NgramVector) -> f64 {
        match self {
            Metric::Cosine => cosine_similar(vec1, vec2),
            Metric::Jaccard => jaccard_index(vec1, vec2),
        }
    }

    /// Stable name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Jaccard => "jaccard",
        }
    }
}

/// Vectorize two strings with n-gram size `n` and score them with `metric`.
///
/// ```
/// use ngram_match::{ngram_similarity, Metric};
///
/// let score = ngram_similarity("night", "nacht", 2, Metric::Jaccard).unwrap();
/// assert!((score - 1.0 / 7.0).abs() < 1e-12);
/// ```
pub fn ngram_similarity(a: &str, b: &str, n: usize, metric: Metric) -> Result<f64, SimilarityError> {
    let vec_a = text_to_ngrams_vector(a, n)?;
    let vec_b = text_to_ngrams_vector(b, n)?;
    Ok(metric.score(&vec_a, &vec_b))
}
