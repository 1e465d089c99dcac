//! Diagnosis history — append-only plain-text log plus read-back for
//! the history view.
//!
//! Block format, one block per diagnosis request, in arrival order:
//!
//! ```text
//! Symptoms: Fever, Cough
//! Diagnosis: Possible diagnosis: Flu or Common Cold.
//! Recommendation: Rest, hydration, and consult a doctor if severe.
//! ----
//! ```
//!
//! Blocks are never edited or deleted. Append failures are reported to
//! the operational log and swallowed; a failed write must never
//! interrupt a diagnosis request.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator line terminating each history block.
const BLOCK_SEPARATOR: &str = "----";

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One past diagnosis request, as read back from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Selected symptom labels, in original selection order.
    pub symptoms: Vec<String>,
    /// Full diagnosis text, newlines included.
    pub diagnosis: String,
}

/// Appends one history block, creating the parent directory if needed.
pub fn append_entry(
    path: &Path,
    symptoms: &[String],
    diagnosis: &str,
) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Symptoms: {}", symptoms.join(", "))?;
    writeln!(file, "Diagnosis: {diagnosis}")?;
    writeln!(file, "{BLOCK_SEPARATOR}")?;
    Ok(())
}

/// Records a diagnosis in the history log, swallowing any I/O failure.
///
/// The caller has already shown the diagnosis to the user; losing one
/// history block is preferable to failing the request.
pub fn record_history(path: &Path, symptoms: &[String], diagnosis: &str) {
    if let Err(e) = append_entry(path, symptoms, diagnosis) {
        tracing::error!(path = %path.display(), "Error saving history: {e}");
    }
}

/// Reads the history log back into entries, oldest first.
///
/// A missing log is an empty history, not an error. Diagnosis text may
/// span multiple lines; everything between the "Diagnosis: " prefix and
/// the separator belongs to the entry.
pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    let mut symptoms: Vec<String> = Vec::new();
    let mut diagnosis_lines: Vec<&str> = Vec::new();
    let mut in_diagnosis = false;

    for line in content.lines() {
        if line == BLOCK_SEPARATOR {
            entries.push(HistoryEntry {
                symptoms: std::mem::take(&mut symptoms),
                diagnosis: diagnosis_lines.join("\n"),
            });
            diagnosis_lines.clear();
            in_diagnosis = false;
        } else if let Some(rest) = line.strip_prefix("Symptoms: ") {
            symptoms = rest
                .split(", ")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();
            in_diagnosis = false;
        } else if let Some(rest) = line.strip_prefix("Diagnosis: ") {
            diagnosis_lines.push(rest);
            in_diagnosis = true;
        } else if in_diagnosis {
            diagnosis_lines.push(line);
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn append_writes_exact_block_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.txt");

        append_entry(&path, &sel(&["Fever", "Cough"]), "Some verdict.\nRest up.").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Symptoms: Fever, Cough\nDiagnosis: Some verdict.\nRest up.\n----\n"
        );
    }

    #[test]
    fn append_creates_missing_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data").join("history.txt");

        append_entry(&path, &sel(&["Fever"]), "Verdict").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn append_is_monotonic_in_call_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.txt");

        for i in 0..3 {
            append_entry(&path, &sel(&["Fever"]), &format!("Verdict {i}")).unwrap();
        }

        let entries = load_history(&path).unwrap();
        assert_eq!(entries.len(), 3);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.diagnosis, format!("Verdict {i}"));
        }
    }

    #[test]
    fn record_history_swallows_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory at the log path makes the open fail.
        let path = tmp.path().join("history.txt");
        std::fs::create_dir_all(&path).unwrap();

        record_history(&path, &sel(&["Fever"]), "Verdict");
    }

    #[test]
    fn load_missing_log_yields_empty_history() {
        let tmp = tempfile::tempdir().unwrap();
        let entries = load_history(&tmp.path().join("history.txt")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn load_round_trips_multiline_diagnosis() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.txt");

        let symptoms = sel(&["Headache", "Nausea"]);
        let diagnosis = "Possible diagnosis: Migraine.\nRecommendation: Rest.";
        append_entry(&path, &symptoms, diagnosis).unwrap();

        let entries = load_history(&path).unwrap();
        assert_eq!(
            entries,
            vec![HistoryEntry {
                symptoms,
                diagnosis: diagnosis.to_string(),
            }]
        );
    }

    #[test]
    fn load_preserves_selection_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.txt");

        append_entry(&path, &sel(&["Nausea", "Fever", "Cough"]), "Verdict").unwrap();

        let entries = load_history(&path).unwrap();
        assert_eq!(entries[0].symptoms, sel(&["Nausea", "Fever", "Cough"]));
    }

    #[test]
    fn history_entry_serializes_for_frontend() {
        let entry = HistoryEntry {
            symptoms: sel(&["Fever"]),
            diagnosis: "Verdict".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"symptoms\":[\"Fever\"]"));
        assert!(json.contains("\"diagnosis\":\"Verdict\""));
    }
}
