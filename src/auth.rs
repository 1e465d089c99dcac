//! Credential gate for the diagnosis screen.
//!
//! A single fixed operator account; the check is a constant-time
//! comparison against the compiled-in pair. This is an access gate,
//! not an authentication subsystem — there is no account storage,
//! no hashing, no recovery.

use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

const OPERATOR_USERNAME: &str = "admin";
const OPERATOR_PASSWORD: &str = "admin";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter a username")]
    EmptyUsername,

    #[error("Please enter a password")]
    EmptyPassword,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Checks a username/password pair against the fixed operator account.
///
/// Empty fields are rejected before the comparison so the caller can
/// surface a field-level validation message. The password is held in a
/// zeroizing buffer and both comparisons are constant-time.
pub fn verify_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }

    let password = Zeroizing::new(password.as_bytes().to_vec());
    let user_ok = username.as_bytes().ct_eq(OPERATOR_USERNAME.as_bytes());
    let pass_ok = password.ct_eq(OPERATOR_PASSWORD.as_bytes());
    if bool::from(user_ok & pass_ok) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
