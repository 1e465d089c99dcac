//! Diagnosis screen — Tauri IPC commands.
//!
//! Two commands:
//! - `get_symptom_catalog`: the fixed checklist (static data)
//! - `diagnose_symptoms`: run the engine, record history, retain the
//!   result for the report screen

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::catalog;
use crate::core_state::AppState;
use crate::diagnosis;
use crate::history;

/// Result of one diagnosis request, serialised to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisReport {
    /// The labels that were evaluated, in selection order.
    pub symptoms: Vec<String>,
    /// Full verdict text.
    pub diagnosis: String,
}

/// Returns the selectable symptom labels, in display order.
#[tauri::command]
pub fn get_symptom_catalog() -> Vec<String> {
    catalog::symptom_catalog()
}

/// Runs the diagnosis engine over the selected symptoms.
///
/// The verdict is appended to the history log (failures are logged and
/// swallowed) and retained in state for a later "Save Report".
#[tauri::command]
pub fn diagnose_symptoms(
    symptoms: Vec<String>,
    state: State<'_, Arc<AppState>>,
) -> Result<DiagnosisReport, String> {
    state.require_session().map_err(|e| e.to_string())?;

    if symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err("Please select at least one symptom.".into());
    }

    let verdict = diagnosis::diagnose(&symptoms);

    history::record_history(&state.history_path, &symptoms, &verdict);
    state
        .set_last_diagnosis(&verdict)
        .map_err(|e| e.to_string())?;
    state.update_activity();

    Ok(DiagnosisReport {
        symptoms,
        diagnosis: verdict,
    })
}
