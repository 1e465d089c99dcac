//! History view — Tauri IPC command.

use std::sync::Arc;

use tauri::State;

use crate::core_state::AppState;
use crate::history::{self, HistoryEntry};

/// Returns all past diagnosis blocks, oldest first. A history log that
/// does not exist yet reads back as empty.
#[tauri::command]
pub fn get_diagnosis_history(
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<HistoryEntry>, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let entries = history::load_history(&state.history_path).map_err(|e| e.to_string())?;

    state.update_activity();
    Ok(entries)
}
