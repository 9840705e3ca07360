//! Passphrase input
//!
//! Passphrases come from the environment when set (for scripting), otherwise
//! from a hidden terminal prompt.

use crate::crypto::SecureString;
use crate::error::{LockerError, LockerResult};

/// Passphrase of the database being opened or created
pub const PASSPHRASE_ENV: &str = "PASSLOCKER_PASSPHRASE";

/// Replacement passphrase for `passwd`
pub const NEW_PASSPHRASE_ENV: &str = "PASSLOCKER_NEW_PASSPHRASE";

fn from_env(var: &str) -> Option<SecureString> {
    std::env::var(var).ok().map(SecureString::from)
}

/// Prompt for a passphrase (hidden input)
pub fn prompt_passphrase(prompt: &str) -> LockerResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| LockerError::Io(format!("Failed to read passphrase: {}", e)))
}

/// Passphrase for an existing database
pub fn read_passphrase() -> LockerResult<SecureString> {
    match from_env(PASSPHRASE_ENV) {
        Some(passphrase) => Ok(passphrase),
        None => prompt_passphrase("Passphrase: "),
    }
}

/// Passphrase for a new database
pub fn read_new_passphrase(min_len: usize) -> LockerResult<SecureString> {
    read_new_from(PASSPHRASE_ENV, min_len)
}

/// Replacement passphrase for an existing database
pub fn read_replacement_passphrase(min_len: usize) -> LockerResult<SecureString> {
    read_new_from(NEW_PASSPHRASE_ENV, min_len)
}

fn read_new_from(var: &str, min_len: usize) -> LockerResult<SecureString> {
    if let Some(passphrase) = from_env(var) {
        check_new_passphrase(&passphrase, &passphrase, min_len)?;
        return Ok(passphrase);
    }

    loop {
        let first = prompt_passphrase("New passphrase: ")?;
        let second = prompt_passphrase("Confirm passphrase: ")?;

        match check_new_passphrase(&first, &second, min_len) {
            Ok(()) => return Ok(first),
            Err(e) => eprintln!("{} Please try again.", e),
        }
    }
}

/// Validate a new passphrase and its confirmation
///
/// Empty or mismatched input is an error. A short passphrase is accepted
/// with a warning on stderr.
pub fn check_new_passphrase(first: &str, second: &str, min_len: usize) -> LockerResult<()> {
    if first.is_empty() {
        return Err(LockerError::Validation("Passphrase is empty.".into()));
    }
    if first != second {
        return Err(LockerError::Validation("Passphrases do not match.".into()));
    }
    if first.chars().count() < min_len {
        eprintln!(
            "Warning: passphrase is shorter than {} characters and may be insecure.",
            min_len
        );
    }
    Ok(())
}
