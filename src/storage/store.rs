use std::collections::{HashMap, HashSet};
use std::fs;
use parking_lot::RwLock;
use tracing::{error, info};
use crate::core::stats::StoreStats;
use crate::core::types::{Submission, SubmissionId};
use crate::storage::layout::StorageLayout;
use crate::storage::snapshot;

/// Process-wide submission store: an in-memory map with a write-through
/// JSON snapshot. The map and its backing file are the only shared mutable
/// state in the engine; one writer section protects both.
pub struct SubmissionStore {
    storage: StorageLayout,
    submissions: RwLock<HashMap<SubmissionId, Submission>>,
}

impl SubmissionStore {
    /// Open the store, loading the persisted snapshot when one exists.
    /// A missing file starts empty; an unreadable or unparseable file also
    /// starts empty, logged loudly so an operator can restore a backup.
    pub fn open(storage: StorageLayout) -> Self {
        let submissions = match snapshot::load(&storage) {
            Ok(Some(map)) => {
                info!(count = map.len(), "loaded submission snapshot");
                map
            }
            Ok(None) => HashMap::new(),
            Err(err) => {
                error!(
                    %err,
                    path = %storage.snapshot_path().display(),
                    "discarding unreadable submission snapshot, starting empty"
                );
                HashMap::new()
            }
        };

        SubmissionStore {
            storage,
            submissions: RwLock::new(submissions),
        }
    }

    /// Insert a submission and persist the full snapshot before returning.
    /// The write lock spans read-modify-write-and-persist so concurrent
    /// inserts cannot interleave their snapshots. A snapshot I/O failure is
    /// logged and swallowed; the in-memory insert stands.
    pub fn insert(
        &self,
        code: &str,
        author_id: &str,
        problem_id: &str,
        embedding: Option<Vec<f32>>,
    ) -> Submission {
        let submission = Submission::new(code, author_id, problem_id, embedding);

        let mut submissions = self.submissions.write();
        submissions.insert(submission.id, submission.clone());
        if let Err(err) = snapshot::save(&self.storage, &submissions) {
            error!(%err, id = %submission.id, "failed to persist submission snapshot");
        }

        submission
    }

    /// All submissions recorded for a problem, in unspecified order
    pub fn query_by_problem(&self, problem_id: &str) -> Vec<Submission> {
        self.submissions
            .read()
            .values()
            .filter(|s| s.problem_id == problem_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.submissions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.read().is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let submissions = self.submissions.read();
        let problems: HashSet<&str> = submissions.values().map(|s| s.problem_id.as_str()).collect();
        let authors: HashSet<&str> = submissions.values().map(|s| s.author_id.as_str()).collect();
        let snapshot_size_bytes = fs::metadata(self.storage.snapshot_path())
            .map(|m| m.len())
            .unwrap_or(0);

        StoreStats {
            total_submissions: submissions.len(),
            distinct_problems: problems.len(),
            distinct_authors: authors.len(),
            snapshot_size_bytes,
        }
    }
}
