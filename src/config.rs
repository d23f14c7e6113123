//! Configuration for candidate matching.
//!
//! `MatchConfig` is a plain value with no I/O or environment lookups, so a
//! match is a pure function of `(query, choices, config)`.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::metrics::Metric;
use crate::vector::DEFAULT_NGRAM_SIZE;

/// Minimum score a candidate needs when the caller does not choose one.
pub const DEFAULT_SCORE_CUTOFF: f64 = 0.70;

/// Tuning knobs for [`crate::select_best_list_with`] and
/// [`crate::select_best_one_with`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Number of chars per n-gram.
    ///
    /// Small values tolerate typos better; larger values reward long shared
    /// runs of text.
    #[serde(default = "MatchConfig::default_ngram_size")]
    pub ngram_size: usize,
    /// Candidates scoring below this are dropped. Values above `1.0` reject
    /// everything.
    #[serde(default = "MatchConfig::default_score_cutoff")]
    pub score_cutoff: f64,
    /// Metric used to score each candidate against the query.
    #[serde(default)]
    pub metric: Metric,
}

impl MatchConfig {
    fn default_version() -> u32 {
        1
    }

    fn default_ngram_size() -> usize {
        DEFAULT_NGRAM_SIZE
    }

    fn default_score_cutoff() -> f64 {
        DEFAULT_SCORE_CUTOFF
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    pub fn with_score_cutoff(mut self, score_cutoff: f64) -> Self {
        self.score_cutoff = score_cutoff;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.version < 1 {
            return Err(SimilarityError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.ngram_size < 1 {
            return Err(SimilarityError::InvalidNgramSize { n: self.ngram_size });
        }
        if self.score_cutoff.is_nan() {
            return Err(SimilarityError::InvalidScoreCutoff {
                cutoff: self.score_cutoff,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            ngram_size: Self::default_ngram_size(),
            score_cutoff: Self::default_score_cutoff(),
            metric: Metric::Cosine,
        }
    }
}
