//! Path management for PassLocker
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default database location.
//!
//! ## Path Resolution Order
//!
//! 1. `PASSLOCKER_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/passlocker` or `~/.config/passlocker`
//! 3. Windows: `%APPDATA%\passlocker`

use std::path::{Path, PathBuf};

use crate::error::{LockerError, LockerResult};

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "PASSLOCKER_HOME";

/// Manages all paths used by PassLocker
#[derive(Debug, Clone)]
pub struct LockerPaths {
    /// Base directory for settings and the default database
    base_dir: PathBuf,
}

impl LockerPaths {
    /// Create a new LockerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> LockerResult<Self> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LockerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/passlocker/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Database used when no file is given and none was opened before
    pub fn default_database_file(&self) -> PathBuf {
        self.base_dir.join("passwords.pdb")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> LockerResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LockerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> LockerResult<PathBuf> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                LockerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("passlocker"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> LockerResult<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| LockerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("passlocker"))
}
