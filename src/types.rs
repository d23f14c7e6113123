use serde::Serialize;

/// A candidate paired with its similarity to the query.
///
/// `choice` borrows from the caller's candidate list. The value
/// `("", 0.0)` doubles as the "no match" result of
/// [`crate::select_best_one`]; see [`MatchResult::none`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// The matched candidate, exactly as supplied.
    pub choice: &'a str,
    /// Similarity score in `[0.0, 1.0]`.
    pub score: f64,
}

impl<'a> MatchResult<'a> {
    pub fn new(choice: &'a str, score: f64) -> Self {
        Self { choice, score }
    }

    /// The `("", 0.0)` result returned when no candidate passes the cutoff.
    pub fn none() -> Self {
        Self {
            choice: "",
            score: 0.0,
        }
    }

    /// True for the `("", 0.0)` result.
    ///
    /// An empty-string candidate accepted with a cutoff of `0.0` or below is
    /// indistinguishable from "no match".
    pub fn is_none(&self) -> bool {
        self.choice.is_empty() && self.score == 0.0
    }
}

impl<'a> From<MatchResult<'a>> for (&'a str, f64) {
    fn from(result: MatchResult<'a>) -> Self {
        (result.choice, result.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty_pair() {
        let none = MatchResult::none();
        assert!(none.is_none());
        assert_eq!(<(&str, f64)>::from(none), ("", 0.0));
    }

    #[test]
    fn real_match_is_not_none() {
        assert!(!MatchResult::new("bitten", 0.8).is_none());
        assert!(!MatchResult::new("", 0.5).is_none());
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_value(MatchResult::new("mitten", 0.8)).unwrap();
        assert_eq!(json["choice"], "mitten");
        assert_eq!(json["score"], 0.8);
    }
}
