use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MedAssist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,medassist_lib=debug".to_string()
}

/// Get the application data directory
/// ~/MedAssist/ on all platforms (user-visible, plain-text artifacts)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Path of the append-only diagnosis history log.
pub fn history_path() -> PathBuf {
    app_data_dir().join("history.txt")
}

/// Path of the single-diagnosis report file (overwritten on each save).
pub fn report_path() -> PathBuf {
    app_data_dir().join("diagnosis_report.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("MedAssist"));
    }

    #[test]
    fn history_path_under_app_data() {
        let path = history_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("history.txt"));
    }

    #[test]
    fn report_path_under_app_data() {
        let path = report_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("diagnosis_report.txt"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
