pub mod auth;
pub mod diagnosis;
pub mod history;
pub mod report;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
