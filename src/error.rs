use thiserror::Error;

/// Errors returned when an n-gram size or match configuration is unusable.
///
/// A query that matches nothing is not an error; see [`crate::MatchResult::none`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("invalid ngram size: n must be >= 1 (got {n})")]
    InvalidNgramSize { n: usize },

    #[error("invalid score cutoff: {cutoff} is not a number")]
    InvalidScoreCutoff { cutoff: f64 },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
