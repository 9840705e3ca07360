//! Secure memory handling for passphrases
//!
//! Provides a string type that zeroes its contents on drop and never prints
//! them.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A string type that zeroes its contents on drop
///
/// Use this for passphrases read from the terminal or environment.
pub struct SecureString {
    inner: Zeroizing<String>,
}

impl SecureString {
    /// Create a new SecureString
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(s.into()),
        }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
