//! Report screen — Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::AppState;
use crate::report;

/// Writes the displayed diagnosis to the report file and returns the
/// path written. Blank text is rejected before anything is written.
#[tauri::command]
pub fn save_report(text: String, state: State<'_, Arc<AppState>>) -> Result<String, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let path = report::save_report(&state.report_path, &text).map_err(|e| e.to_string())?;

    state.update_activity();
    tracing::info!(path = %path.display(), "Report saved");
    Ok(path.display().to_string())
}

/// The last diagnosis shown this session, if any — lets the report
/// screen repopulate after navigation.
#[tauri::command]
pub fn get_last_diagnosis(state: State<'_, Arc<AppState>>) -> Result<Option<String>, String> {
    state.require_session().map_err(|e| e.to_string())?;
    state.last_diagnosis().map_err(|e| e.to_string())
}
