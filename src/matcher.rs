//! Lazy scoring of candidate strings against a query.

use tracing::trace;

use crate::config::MatchConfig;
use crate::error::SimilarityError;
use crate::metrics::Metric;
use crate::types::MatchResult;
use crate::vector::NgramVector;

/// Iterator returned by [`select_best_list`] and [`select_best_list_with`].
///
/// Each call to `next` vectorizes and scores candidates until one passes the
/// cutoff, so nothing is computed before the caller asks for it. The iterator
/// is single-pass; call the constructor again to rescan.
#[derive(Debug, Clone)]
pub struct BestList<'q, I> {
    query: &'q str,
    query_vec: NgramVector,
    choices: I,
    score_cutoff: f64,
    metric: Metric,
}

impl<'q, I> BestList<'q, I> {
    fn new(query: &'q str, choices: I, ngram_size: usize, score_cutoff: f64, metric: Metric) -> Self {
        Self {
            query,
            query_vec: NgramVector::build(query, ngram_size),
            choices,
            score_cutoff,
            metric,
        }
    }

    pub fn score_cutoff(&self) -> f64 {
        self.score_cutoff
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl<'a, I, S> Iterator for BestList<'_, I>
where
    I: Iterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    type Item = MatchResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for choice in self.choices.by_ref() {
            let choice = choice.as_ref();
            // Raw string equality, not vector equality.
            if choice == self.query {
                trace!(choice, "self_match_skipped");
                continue;
            }

            let choice_vec = NgramVector::build(choice, self.query_vec.n());
            let score = self.metric.score(&self.query_vec, &choice_vec);
            if score >= self.score_cutoff {
                trace!(choice, score, metric = self.metric.name(), "candidate_accepted");
                return Some(MatchResult::new(choice, score));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.choices.size_hint().1)
    }
}

/// Score every candidate against `query` with bigram cosine similarity,
/// yielding those at or above `score_cutoff`.
///
/// Candidates are visited in input order. A candidate equal to `query` is
/// never yielded, even though it would score `1.0`.
///
/// ```
/// use ngram_match::select_best_list;
///
/// let choices = ["economics", "economy", "ecology", "astronomy"];
/// let hits: Vec<_> = select_best_list("economics", &choices, 0.5).collect();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].choice, "economy");
/// ```
pub fn select_best_list<'q, 'a, C, S>(
    query: &'q str,
    choices: C,
    score_cutoff: f64,
) -> BestList<'q, C::IntoIter>
where
    C: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let cfg = MatchConfig::default();
    BestList::new(query, choices.into_iter(), cfg.ngram_size, score_cutoff, cfg.metric)
}

/// Like [`select_best_list`], with n-gram size, cutoff and metric taken from
/// `cfg`.
///
/// # Errors
///
/// Returns the first error from [`MatchConfig::validate`].
pub fn select_best_list_with<'q, 'a, C, S>(
    query: &'q str,
    choices: C,
    cfg: &MatchConfig,
) -> Result<BestList<'q, C::IntoIter>, SimilarityError>
where
    C: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    cfg.validate()?;
    Ok(BestList::new(
        query,
        choices.into_iter(),
        cfg.ngram_size,
        cfg.score_cutoff,
        cfg.metric,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_input_order() {
        let choices = vec!["mitten".to_string(), "bitten".to_string(), "kitchen".to_string()];
        let hits: Vec<&str> = select_best_list("kitten", &choices, 0.0)
            .map(|hit| hit.choice)
            .collect();
        assert_eq!(hits, vec!["mitten", "bitten", "kitchen"]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        // {ab, bc} vs {bc, cd} scores exactly 0.5.
        let hits: Vec<_> = select_best_list("abc", &["bcd"], 0.5).collect();
        assert_eq!(hits, vec![MatchResult::new("bcd", 0.5)]);
    }

    #[test]
    fn identical_choice_is_skipped() {
        let hits: Vec<_> = select_best_list("economics", &["economics"], 0.0).collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn same_vector_different_string_is_kept() {
        // Trailing space adds no bigram, so the vectors are equal.
        let hits: Vec<_> = select_best_list("economics", &["economics "], 0.7).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 1.0);
    }

    #[test]
    fn tab_separated_text_is_scored() {
        // {a\t, \tb} vs {a\t, \tb, b\t, \tc}: dot 2, norms sqrt(2) and 2.
        let hits: Vec<_> = select_best_list("a\tb", &["a\tb\tc"], 0.7).collect();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].score - 2.0 / 8f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn cutoff_above_one_yields_nothing() {
        let hits: Vec<_> = select_best_list("kitten", &["kitten!", "mitten"], 1.01).collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn empty_choices_yield_nothing() {
        let choices: Vec<String> = Vec::new();
        assert_eq!(select_best_list("kitten", &choices, 0.0).count(), 0);
    }

    #[test]
    fn lazy_iteration_stops_early() {
        let choices = ["mitten", "bitten", "sitting"];
        let mut list = select_best_list("kitten", &choices, 0.5);
        assert_eq!(list.size_hint(), (0, Some(3)));
        let first = list.next().unwrap();
        assert_eq!(first.choice, "mitten");
        assert_eq!(list.size_hint(), (0, Some(2)));
    }

    #[test]
    fn iterator_is_exhausted_after_one_pass() {
        let choices = ["mitten", "bitten"];
        let mut list = select_best_list("kitten", &choices, 0.0);
        assert_eq!(list.by_ref().count(), 2);
        assert!(list.next().is_none());
    }

    #[test]
    fn accepts_str_slices_directly() {
        let choices: [&str; 2] = ["bitten", "sitting"];
        let hits: Vec<_> = select_best_list("kitten", choices.iter().copied(), 0.5).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].choice, "bitten");
    }

    #[test]
    fn with_config_uses_metric_and_size() {
        let cfg = MatchConfig::new()
            .with_metric(Metric::Jaccard)
            .with_ngram_size(1)
            .with_score_cutoff(0.0);
        let list = select_best_list_with("abc", &["cab"], &cfg).unwrap();
        assert_eq!(list.metric(), Metric::Jaccard);
        let hits: Vec<_> = list.collect();
        // Same letters, different order: unigram sets are equal.
        assert_eq!(hits, vec![MatchResult::new("cab", 1.0)]);
    }

    #[test]
    fn with_config_rejects_invalid() {
        let cfg = MatchConfig::new().with_ngram_size(0);
        let err = select_best_list_with("abc", &["abd"], &cfg).unwrap_err();
        assert_eq!(err, SimilarityError::InvalidNgramSize { n: 0 });
    }
}
