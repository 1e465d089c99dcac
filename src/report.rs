//! Report writer — saves the last displayed diagnosis verbatim to a
//! fixed location, overwriting any previous report.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No diagnosis to save")]
    EmptyReport,

    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `text` verbatim to `path`, creating the parent directory if
/// needed. Blank text is rejected before anything touches the disk.
pub fn save_report(path: &Path, text: &str) -> Result<PathBuf, ReportError> {
    if text.trim().is_empty() {
        return Err(ReportError::EmptyReport);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    Ok(path.to_path_buf())
}
