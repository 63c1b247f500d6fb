use std::collections::HashMap;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use crate::core::error::{Error, Result};
use crate::core::types::{Submission, SubmissionId};
use crate::storage::layout::StorageLayout;

/// Load the persisted snapshot; Ok(None) when none has been written yet
pub fn load(storage: &StorageLayout) -> Result<Option<HashMap<SubmissionId, Submission>>> {
    let path = storage.snapshot_path();
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)?;
    let submissions = serde_json::from_str(&data)?;
    Ok(Some(submissions))
}

/// Overwrite the full snapshot. Written to a temp file in the same
/// directory and renamed into place, so a reader never observes a
/// half-written file.
pub fn save(storage: &StorageLayout, submissions: &HashMap<SubmissionId, Submission>) -> Result<()> {
    let data = serde_json::to_string_pretty(submissions)?;

    let mut tmp = NamedTempFile::new_in(&storage.base_dir)?;
    tmp.write_all(data.as_bytes())?;
    tmp.persist(storage.snapshot_path())
        .map_err(|err| Error::from(err.error))?;

    Ok(())
}
