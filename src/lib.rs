pub mod auth;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod diagnosis;
pub mod history;
pub mod report;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MedAssist starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(Arc::new(core_state::AppState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::auth::login,
            commands::auth::logout,
            commands::auth::is_authenticated,
            commands::auth::check_inactivity,
            commands::auth::update_activity,
            commands::diagnosis::get_symptom_catalog,
            commands::diagnosis::diagnose_symptoms,
            commands::history::get_diagnosis_history,
            commands::report::save_report,
            commands::report::get_last_diagnosis,
        ])
        .run(tauri::generate_context!())
        .expect("error while running MedAssist");
}
