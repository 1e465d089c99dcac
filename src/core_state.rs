//! Shared application state behind the Tauri IPC boundary.
//!
//! `AppState` is wrapped in `Arc` at startup and managed by the Tauri
//! builder. Usage is strictly request/response — one command at a time
//! in practice — but Tauri state must be `Send + Sync`, so the session
//! and last-diagnosis slots sit behind `RwLock`.

use std::path::PathBuf;
use std::sync::{Mutex, RwLock};
use std::time::Instant;

use thiserror::Error;

use crate::config;

/// Inactivity timeout before the session auto-locks: 15 minutes.
const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 900;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("State lock poisoned")]
    LockPoisoned,

    #[error("Not signed in")]
    NotAuthenticated,
}

/// An authenticated operator session. `None` in `AppState` means the
/// login screen is the only usable surface.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub username: String,
}

pub struct AppState {
    /// Active operator session. `None` when signed out or auto-locked.
    session: RwLock<Option<UserSession>>,
    /// Last diagnosis text shown to the user, kept for "Save Report".
    last_diagnosis: RwLock<Option<String>>,
    /// Last user interaction timestamp, for the inactivity auto-lock.
    last_activity: Mutex<Instant>,
    /// Inactivity timeout threshold in seconds.
    pub inactivity_timeout_secs: u64,
    /// Append-only history log location.
    pub history_path: PathBuf,
    /// Report file location (overwritten on each save).
    pub report_path: PathBuf,
}

impl AppState {
    /// State rooted at the conventional data directory (~/MedAssist).
    pub fn new() -> Self {
        Self::with_paths(config::history_path(), config::report_path())
    }

    /// State with explicit artifact paths. Tests point this at a
    /// temporary directory.
    pub fn with_paths(history_path: PathBuf, report_path: PathBuf) -> Self {
        Self {
            session: RwLock::new(None),
            last_diagnosis: RwLock::new(None),
            last_activity: Mutex::new(Instant::now()),
            inactivity_timeout_secs: DEFAULT_INACTIVITY_TIMEOUT_SECS,
            history_path,
            report_path,
        }
    }

    // ── Session ─────────────────────────────────────────────

    /// Establish a session after the credential gate has passed.
    pub fn sign_in(&self, username: &str) -> Result<(), CoreError> {
        let mut guard = self.session.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(UserSession {
            username: username.to_string(),
        });
        Ok(())
    }

    /// Clear the session and the retained diagnosis text.
    pub fn sign_out(&self) -> Result<(), CoreError> {
        let mut guard = self.session.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = None;
        drop(guard);
        let mut diag = self
            .last_diagnosis
            .write()
            .map_err(|_| CoreError::LockPoisoned)?;
        *diag = None;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Gate for commands behind the login screen.
    pub fn require_session(&self) -> Result<(), CoreError> {
        let guard = self.session.read().map_err(|_| CoreError::LockPoisoned)?;
        if guard.is_some() {
            Ok(())
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }

    // ── Last diagnosis (report screen) ──────────────────────

    pub fn set_last_diagnosis(&self, text: &str) -> Result<(), CoreError> {
        let mut guard = self
            .last_diagnosis
            .write()
            .map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(text.to_string());
        Ok(())
    }

    pub fn last_diagnosis(&self) -> Result<Option<String>, CoreError> {
        let guard = self
            .last_diagnosis
            .read()
            .map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    // ── Inactivity ──────────────────────────────────────────

    /// Record user interaction; called by commands on success.
    pub fn update_activity(&self) {
        if let Ok(mut last) = self.last_activity.lock() {
            *last = Instant::now();
        }
    }

    /// Signs out if the session has been idle past the timeout.
    /// Returns true when the auto-lock fired.
    pub fn check_inactivity(&self) -> Result<bool, CoreError> {
        if !self.is_authenticated() {
            return Ok(false);
        }
        let idle = self
            .last_activity
            .lock()
            .map_err(|_| CoreError::LockPoisoned)?
            .elapsed();
        if idle.as_secs() >= self.inactivity_timeout_secs {
            tracing::info!(idle_secs = idle.as_secs(), "Inactivity timeout, signing out");
            self.sign_out()?;
            return Ok(true);
        }
        Ok(false)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::with_paths(
            PathBuf::from("/tmp/medassist-test/history.txt"),
            PathBuf::from("/tmp/medassist-test/diagnosis_report.txt"),
        )
    }

    #[test]
    fn starts_signed_out() {
        let state = test_state();
        assert!(!state.is_authenticated());
        assert_eq!(state.require_session(), Err(CoreError::NotAuthenticated));
    }

    #[test]
    fn sign_in_establishes_session() {
        let state = test_state();
        state.sign_in("admin").unwrap();
        assert!(state.is_authenticated());
        assert_eq!(state.require_session(), Ok(()));
    }

    #[test]
    fn sign_out_clears_session_and_diagnosis() {
        let state = test_state();
        state.sign_in("admin").unwrap();
        state.set_last_diagnosis("Verdict").unwrap();
        state.sign_out().unwrap();
        assert!(!state.is_authenticated());
        assert_eq!(state.last_diagnosis().unwrap(), None);
    }

    #[test]
    fn last_diagnosis_round_trips() {
        let state = test_state();
        state.set_last_diagnosis("Verdict").unwrap();
        assert_eq!(state.last_diagnosis().unwrap(), Some("Verdict".to_string()));
    }

    #[test]
    fn inactivity_check_is_quiet_when_signed_out() {
        let state = test_state();
        assert_eq!(state.check_inactivity(), Ok(false));
    }

    #[test]
    fn fresh_session_is_not_auto_locked() {
        let state = test_state();
        state.sign_in("admin").unwrap();
        state.update_activity();
        assert_eq!(state.check_inactivity(), Ok(false));
        assert!(state.is_authenticated());
    }
}
