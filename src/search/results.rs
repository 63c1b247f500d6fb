use crate::core::types::Submission;

/// A stored submission annotated with its similarity to the query.
/// Transient: produced per query, never persisted.
#[derive(Debug, Clone)]
pub struct Match {
    pub submission: Submission,
    pub score: f64,
}

/// Highest-scoring match, if any; ties keep the earliest candidate
pub fn best_match(matches: &[Match]) -> Option<&Match> {
    matches
        .iter()
        .reduce(|best, m| if m.score > best.score { m } else { best })
}
