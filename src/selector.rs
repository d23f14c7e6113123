//! Reduction of a [`BestList`] to its single highest-scoring candidate.

use std::time::Instant;

use tracing::{Level, debug};

use crate::config::MatchConfig;
use crate::error::SimilarityError;
use crate::matcher::{BestList, select_best_list, select_best_list_with};
use crate::types::MatchResult;

/// Return the candidate [`select_best_list`] would rank highest.
///
/// Ties go to the candidate that comes first in `choices`. When nothing passes
/// the cutoff, the result is [`MatchResult::none`], i.e. `("", 0.0)`.
///
/// ```
/// use ngram_match::select_best_one;
///
/// let best = select_best_one("kitten", &["sitting", "bitten", "mitten"], 0.0);
/// assert_eq!(best.choice, "bitten");
///
/// let none = select_best_one("economics", &["economics"], 0.70);
/// assert!(none.is_none());
/// ```
pub fn select_best_one<'a, C, S>(query: &str, choices: C, score_cutoff: f64) -> MatchResult<'a>
where
    C: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    pick_best(select_best_list(query, choices, score_cutoff))
}

/// Like [`select_best_one`], configured by `cfg`.
///
/// # Errors
///
/// Returns the first error from [`MatchConfig::validate`].
pub fn select_best_one_with<'a, C, S>(
    query: &str,
    choices: C,
    cfg: &MatchConfig,
) -> Result<MatchResult<'a>, SimilarityError>
where
    C: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    Ok(pick_best(select_best_list_with(query, choices, cfg)?))
}

fn pick_best<'a, I, S>(list: BestList<'_, I>) -> MatchResult<'a>
where
    I: Iterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "ngram.select_best_one",
        metric = list.metric().name(),
        score_cutoff = list.score_cutoff()
    );
    let _guard = span.enter();

    let mut yielded = 0usize;
    let mut best: Option<MatchResult<'a>> = None;
    for candidate in list {
        yielded += 1;
        // Strict comparison keeps the earliest of equal scores.
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    let result = best.unwrap_or_else(MatchResult::none);
    let elapsed_micros = start.elapsed().as_micros();
    debug!(
        yielded,
        choice = result.choice,
        score = result.score,
        elapsed_micros,
        "select_best_one"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metric;

    #[test]
    fn picks_highest_score() {
        let best = select_best_one("economics", &["ecology", "economy", "astronomy"], 0.0);
        assert_eq!(best.choice, "economy");
    }

    #[test]
    fn ties_go_to_first_candidate() {
        // "bitten" and "mitten" both score 0.8 against "kitten".
        let best = select_best_one("kitten", &["bitten", "mitten"], 0.0);
        assert_eq!(best, MatchResult::new("bitten", 0.8));

        let best = select_best_one("kitten", &["mitten", "bitten"], 0.0);
        assert_eq!(best.choice, "mitten");
    }

    #[test]
    fn self_match_returns_none() {
        let best = select_best_one("economics", &["economics"], 0.70);
        assert_eq!(<(&str, f64)>::from(best), ("", 0.0));
    }

    #[test]
    fn empty_choices_return_none() {
        let choices: Vec<String> = Vec::new();
        assert!(select_best_one("kitten", &choices, 0.0).is_none());
    }

    #[test]
    fn nothing_above_cutoff_returns_none() {
        assert!(select_best_one("kitten", &["sitting"], 0.9).is_none());
    }

    #[test]
    fn with_config_jaccard() {
        let cfg = MatchConfig::new()
            .with_metric(Metric::Jaccard)
            .with_score_cutoff(0.5);
        // kitten/mitten share 4 of 6 bigrams.
        let best = select_best_one_with("kitten", &["sitting", "mitten"], &cfg).unwrap();
        assert_eq!(best.choice, "mitten");
        assert!((best.score - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn with_config_propagates_errors() {
        let cfg = MatchConfig::new().with_score_cutoff(f64::NAN);
        assert!(matches!(
            select_best_one_with("kitten", &["mitten"], &cfg),
            Err(SimilarityError::InvalidScoreCutoff { .. })
        ));
    }
}
