use serde::{Serialize, Deserialize};

/// Store statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_submissions: usize,
    pub distinct_problems: usize,
    pub distinct_authors: usize,
    pub snapshot_size_bytes: u64,   // 0 when no snapshot has been written yet
}
