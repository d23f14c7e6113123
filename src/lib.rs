//! # ngram-match
//!
//! Character n-gram similarity and best-match selection for short strings.
//!
//! ## Contract
//!
//! - Every function is a pure function of its arguments: no I/O, no global
//!   state, no threads.
//! - Input is used exactly as given. Case folding, punctuation stripping and
//!   other cleanup are the caller's job.
//! - Scores always lie in `[0.0, 1.0]`. "Nothing matched" is the ordinary
//!   value `("", 0.0)`, not an error.
//!
//! ## Pipeline
//!
//! 1.  **Vectorize**: [`text_to_ngrams_vector`] slides a window of `n` chars
//!     over the text and counts each window in an [`NgramVector`]. Windows
//!     containing a space are skipped.
//!
//! 2.  **Score**: [`cosine_similar`] compares count vectors, weighing repeated
//!     n-grams; [`jaccard_index`] compares only which n-grams are present.
//!
//! 3.  **Match**: [`select_best_list`] lazily scores each candidate against the
//!     query and yields those at or above the cutoff, skipping any candidate
//!     identical to the query.
//!
//! 4.  **Select**: [`select_best_one`] keeps the highest-scoring candidate,
//!     preferring the earliest on ties.
//!
//! The `_with` variants take a [`MatchConfig`] to change the n-gram size,
//! cutoff or metric.
//!
//! ## Example Usage
//!
//! ```
//! use ngram_match::{select_best_one, select_best_one_with, MatchConfig, Metric};
//!
//! let choices = ["sitting", "bitten", "mitten"];
//!
//! let best = select_best_one("kitten", &choices, 0.70);
//! assert_eq!(best.choice, "bitten");
//! assert!(best.score >= 0.70);
//!
//! let cfg = MatchConfig::new().with_metric(Metric::Jaccard).with_score_cutoff(0.9);
//! let best = select_best_one_with("kitten", &choices, &cfg).unwrap();
//! assert!(best.is_none());
//! ```
//!
//! ## Observability
//!
//! Events go through [`tracing`]: a `trace` event per accepted candidate and a
//! `debug` event with timing per [`select_best_one`] call. Install a
//! subscriber in the application to see them.

mod config;
mod error;
mod matcher;
mod metrics;
mod selector;
mod types;
mod vector;

pub use crate::config::{DEFAULT_SCORE_CUTOFF, MatchConfig};
pub use crate::error::SimilarityError;
pub use crate::matcher::{BestList, select_best_list, select_best_list_with};
pub use crate::metrics::{Metric, cosine_similar, jaccard_index, ngram_similarity};
pub use crate::selector::{select_best_one, select_best_one_with};
pub use crate::types::MatchResult;
pub use crate::vector::{DEFAULT_NGRAM_SIZE, NgramVector, text_to_ngrams_vector};
