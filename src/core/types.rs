use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Author recorded when a submission arrives without one
pub const ANONYMOUS_AUTHOR: &str = "anonymous";
/// Problem recorded when a submission arrives without one
pub const DEFAULT_PROBLEM: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn generate() -> Self {
        SubmissionId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate's answer to one problem. Immutable once inserted: later
/// submissions supersede, nothing updates or deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub author_id: String,
    pub problem_id: String,
    pub code: String,                    // Raw source text, stored verbatim
    pub embedding: Option<Vec<f32>>,     // Reserved for a vector-similarity backend
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(code: &str, author_id: &str, problem_id: &str, embedding: Option<Vec<f32>>) -> Self {
        let author_id = if author_id.is_empty() { ANONYMOUS_AUTHOR } else { author_id };
        let problem_id = if problem_id.is_empty() { DEFAULT_PROBLEM } else { problem_id };

        Submission {
            id: SubmissionId::generate(),
            author_id: author_id.to_string(),
            problem_id: problem_id.to_string(),
            code: code.to_string(),
            embedding,
            created_at: Utc::now(),
        }
    }
}
