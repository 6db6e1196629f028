use serde::Serialize;

use crate::checker::scoring::DiseaseScore;

/// Scores at or below this are discarded.
pub const MIN_SCORE: f64 = 10.0;
/// A top score at or above this is presented alone as a strong match.
pub const STRONG_MATCH_SCORE: f64 = 70.0;
pub const MAX_CANDIDATES: usize = 3;

/// Keeps scores strictly above `MIN_SCORE`, highest first. The sort is stable,
/// so equal scores keep catalog order.
pub fn rank(scores: Vec<DiseaseScore>) -> Vec<DiseaseScore> {
    let mut ranked: Vec<DiseaseScore> = scores.into_iter().filter(|s| s.score > MIN_SCORE).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    StrongMatch,
    TopCandidates,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    NoMatch,
    Matches {
        framing: Framing,
        results: Vec<DiseaseScore>,
    },
}

/// Limits what is shown: one result for a strong match, otherwise up to three.
pub fn present(ranked: Vec<DiseaseScore>) -> Presentation {
    let Some(top) = ranked.first() else {
        return Presentation::NoMatch;
    };

    if top.score >= STRONG_MATCH_SCORE {
        Presentation::Matches {
            framing: Framing::StrongMatch,
            results: ranked.into_iter().take(1).collect(),
        }
    } else {
        Presentation::Matches {
            framing: Framing::TopCandidates,
            results: ranked.into_iter().take(MAX_CANDIDATES).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::scoring::ScoreBreakdown;

    fn s(name: &str, score: f64) -> DiseaseScore {
        DiseaseScore {
            disease: name.to_string(),
            score,
            breakdown: ScoreBreakdown::default(),
        }
    }

    fn names(scores: &[DiseaseScore]) -> Vec<&str> {
        scores.iter().map(|s| s.disease.as_str()).collect()
    }

    #[test]
    fn test_filter_is_strictly_above_ten() {
        let ranked = rank(vec![s("a", 10.0), s("b", 10.5), s("c", 0.0)]);
        assert_eq!(names(&ranked), vec!["b"]);
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = rank(vec![s("a", 20.0), s("b", 80.0), s("c", 45.0)]);
        assert_eq!(names(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let ranked = rank(vec![s("a", 30.0), s("b", 50.0), s("c", 30.0), s("d", 50.0)]);
        assert_eq!(names(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_empty_ranking_is_no_match() {
        assert_eq!(present(rank(vec![s("a", 5.0)])), Presentation::NoMatch);
    }

    #[test]
    fn test_strong_match_shows_single_result() {
        let ranked = rank(vec![s("a", 70.0), s("b", 65.0), s("c", 60.0)]);
        match present(ranked) {
            Presentation::Matches { framing, results } => {
                assert_eq!(framing, Framing::StrongMatch);
                assert_eq!(names(&results), vec!["a"]);
            }
            other => panic!("unexpected presentation: {other:?}"),
        }
    }

    #[test]
    fn test_weak_top_shows_up_to_three() {
        let ranked = rank(vec![s("a", 69.9), s("b", 40.0), s("c", 30.0), s("d", 20.0)]);
        match present(ranked) {
            Presentation::Matches { framing, results } => {
                assert_eq!(framing, Framing::TopCandidates);
                assert_eq!(names(&results), vec!["a", "b", "c"]);
            }
            other => panic!("unexpected presentation: {other:?}"),
        }
    }

    #[test]
    fn test_fewer_than_three_candidates() {
        let ranked = rank(vec![s("a", 25.0)]);
        match present(ranked) {
            Presentation::Matches { framing, results } => {
                assert_eq!(framing, Framing::TopCandidates);
                assert_eq!(results.len(), 1);
            }
            other => panic!("unexpected presentation: {other:?}"),
        }
    }
}
