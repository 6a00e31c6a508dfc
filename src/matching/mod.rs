//! Batch matching of engineers to cases.
//!
//! A [`Recommender`] scores candidate engineers for one case and returns
//! matching results. [`batch_match`] runs a recommender over every case.
//! The shipped recommender, [`SkillOverlapRecommender`], is deterministic and
//! scores by overlap between required and held skills.

mod skill_overlap;

pub use skill_overlap::{SkillOverlapRecommender, DEFAULT_MAX_PER_CASE, DEFAULT_MIN_RATE};

use crate::errors::Result;
use crate::records::{Case, Engineer, MatchingResult};

/// Produces matching results for a case from a pool of candidates.
pub trait Recommender {
    /// Recommend engineers for `case`, best match first.
    fn recommend(&self, case: &Case, candidates: &[Engineer]) -> Result<Vec<MatchingResult>>;
}

/// Run `recommender` over every case and concatenate the results in case order.
pub fn batch_match<R: Recommender + ?Sized>(
    cases: &[Case],
    engineers: &[Engineer],
    recommender: &R,
) -> Result<Vec<MatchingResult>> {
    let _span = tracing::debug_span!(
        "batch_match",
        cases = cases.len(),
        engineers = engineers.len()
    )
    .entered();

    let mut results = Vec::new();
    for case in cases {
        let recommended = recommender.recommend(case, engineers)?;
        log::debug!(
            "Case '{}' ({}): {} recommendations",
            case.title,
            case.id,
            recommended.len()
        );
        results.extend(recommended);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::records::testing::{case, engineer};

    struct Failing;

    impl Recommender for Failing {
        fn recommend(&self, _case: &Case, _candidates: &[Engineer]) -> Result<Vec<MatchingResult>> {
            Err(Error::Recommender("backend unavailable".into()))
        }
    }

    #[test]
    fn test_batch_match_keeps_case_order() {
        let cases = vec![
            case("c1", "Java案件", &["Java"]),
            case("c2", "Go案件", &["Go"]),
        ];
        let engineers = vec![
            engineer("e1", "佐藤", &["Java", "Go"]),
            engineer("e2", "鈴木", &["Go"]),
        ];
        let recommender = SkillOverlapRecommender::default();
        let results = batch_match(&cases, &engineers, &recommender).unwrap();
        let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c1:e1", "c2:e1", "c2:e2"]);
    }

    #[test]
    fn test_batch_match_propagates_errors() {
        let cases = vec![case("c1", "Java案件", &["Java"])];
        let err = batch_match(&cases, &[], &Failing).unwrap_err();
        assert!(matches!(err, Error::Recommender(_)));
    }

    #[test]
    fn test_batch_match_with_no_cases() {
        let engineers = vec![engineer("e1", "佐藤", &["Java"])];
        let results = batch_match(&[], &engineers, &SkillOverlapRecommender::default()).unwrap();
        assert!(results.is_empty());
    }
}
