//! Record persistence
//!
//! One JSON file per record, named after the sanitized title. Title
//! collisions silently overwrite; last write wins.

use crate::record::Record;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for persistence operations
pub type PersistResult<T> = std::result::Result<T, PersistError>;

/// Characters that never appear in a derived filename
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Strips filesystem-unsafe characters from a title
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !UNSAFE_CHARS.contains(c))
        .collect()
}

/// Derives the record file path for a title within the output directory
pub fn record_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_title(title)))
}

/// Writes a record as a pretty-printed JSON file
///
/// The filename is the sanitized title; an existing file with the same
/// name is replaced without notice.
///
/// # Arguments
///
/// * `dir` - The output directory
/// * `record` - The record to write
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(PersistError)` - Serialization or write failure
pub fn save_record(dir: &Path, record: &Record) -> PersistResult<PathBuf> {
    let path = record_path(dir, &record.title);
    let json = serde_json::to_string_pretty(record)?;

    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;

    Ok(path)
}

/// Removes any previous output directory and creates a fresh one
///
/// A missing directory is not an error; any other removal or creation
/// failure is, and the caller must abort before dispatching work.
pub fn prepare_output_dir(dir: &Path) -> PersistResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::create_dir_all(dir)?;
    Ok(())
}
