use rayon::prelude::*;
use crate::core::types::Submission;
use crate::scoring::scorer::{CompositeScorer, SimilarityScorer};
use crate::search::results::Match;

/// Scans a candidate set for near-duplicates of a query text
pub struct MatchFinder {
    scorer: CompositeScorer,
}

impl MatchFinder {
    pub fn new(scorer: CompositeScorer) -> Self {
        MatchFinder { scorer }
    }

    /// Score every candidate not authored by `exclude_author_id` against
    /// the query and keep those at or above `threshold`, in the order the
    /// candidates were supplied. An author is never matched against their
    /// own history: self-similarity is not a signal.
    pub fn find_similar(
        &self,
        query_code: &str,
        candidates: &[Submission],
        threshold: f64,
        exclude_author_id: Option<&str>,
    ) -> Vec<Match> {
        candidates
            .par_iter()
            .filter(|candidate| exclude_author_id != Some(candidate.author_id.as_str()))
            .map(|candidate| Match {
                score: self.scorer.score(query_code, &candidate.code),
                submission: candidate.clone(),
            })
            .filter(|m| m.score >= threshold)
            .collect()
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        MatchFinder::new(CompositeScorer::default())
    }
}
