//! Login screen — Tauri IPC commands.
//!
//! The credential gate itself lives in `crate::auth`; these commands
//! translate its outcome for the frontend and manage the session slot,
//! including the inactivity auto-lock.

use std::sync::Arc;

use tauri::State;

use crate::auth;
use crate::core_state::AppState;

/// Checks the credential pair and establishes a session on success.
#[tauri::command]
pub fn login(
    username: String,
    password: String,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    auth::verify_credentials(&username, &password).map_err(|e| e.to_string())?;

    state.sign_in(username.trim()).map_err(|e| e.to_string())?;
    state.update_activity();
    tracing::info!("Operator signed in");
    Ok(())
}

/// Ends the session and forgets the last diagnosis.
#[tauri::command]
pub fn logout(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    state.sign_out().map_err(|e| e.to_string())?;
    tracing::info!("Operator signed out");
    Ok(())
}

/// Whether a session is active (frontend routing).
#[tauri::command]
pub fn is_authenticated(state: State<'_, Arc<AppState>>) -> bool {
    state.is_authenticated()
}

/// Signs out if the session has been idle past the timeout.
/// Returns true when the frontend should fall back to the login screen.
#[tauri::command]
pub fn check_inactivity(state: State<'_, Arc<AppState>>) -> Result<bool, String> {
    state.check_inactivity().map_err(|e| e.to_string())
}

/// Records user interaction for the inactivity timer.
#[tauri::command]
pub fn update_activity(state: State<'_, Arc<AppState>>) {
    state.update_activity();
}
