//! Custom error types for PassLocker
//!
//! This module defines the error hierarchy for the library using thiserror,
//! plus the smaller [`LoadError`] used to explain why a database failed to open.

use thiserror::Error;

/// The main error type for PassLocker operations
#[derive(Error, Debug)]
pub enum LockerError {
    /// File I/O errors (unreadable or unwritable paths)
    #[error("I/O error: {0}")]
    Io(String),

    /// Cipher-level failures: truncated or misaligned ciphertext, bad key setup
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Decrypted or imported bytes do not have the expected record shape
    #[error("Format error: {0}")]
    Format(String),

    /// The passphrase does not match the key check stored in the file header
    #[error("Incorrect passphrase")]
    WrongPassphrase,

    /// The authentication tag or header of a sealed file does not verify
    #[error("Integrity check failed: {0}")]
    Integrity(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store failed to load and refuses further use
    #[error("Database is not usable: {0}")]
    InvalidStore(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LockerError {
    /// Create a "not found" error for records
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for records
    pub fn duplicate_record(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a record-shape error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for LockerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LockerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LockerError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Format(err.to_string())
        }
    }
}

/// Result type alias for PassLocker operations
pub type LockerResult<T> = Result<T, LockerError>;

/// Why a database could not be opened
///
/// A store that fails to open is still constructed so the caller can show a
/// specific message; this is the reason it carries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read at all
    #[error("File could not be loaded: {0}")]
    Unreadable(String),

    /// The decrypted bytes failed the record shape check
    #[error("File could not be decrypted, possibly due to an incorrect password")]
    Undecryptable,

    /// The header key check rejected the passphrase
    #[error("Incorrect password")]
    WrongPassphrase,

    /// The file is truncated, malformed, or was modified
    #[error("File is corrupted: {0}")]
    Corrupted(String),
}

impl LoadError {
    /// User-facing explanation
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the passphrase may be the cause
    pub fn may_be_wrong_passphrase(&self) -> bool {
        matches!(self, Self::Undecryptable | Self::WrongPassphrase)
    }
}

impl From<LockerError> for LoadError {
    fn from(err: LockerError) -> Self {
        match err {
            LockerError::Io(msg) => Self::Unreadable(msg),
            LockerError::Format(_) => Self::Undecryptable,
            LockerError::WrongPassphrase => Self::WrongPassphrase,
            LockerError::Crypto(msg) | LockerError::Integrity(msg) => Self::Corrupted(msg),
            other => Self::Corrupted(other.to_string()),
        }
    }
}
