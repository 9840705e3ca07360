//! User settings for PassLocker
//!
//! Manages preferences: the layout and key derivation cost for new
//! databases, generator defaults, strength-estimate guess rates, and the
//! database used when `--file` is not given.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LockerPaths;
use crate::crypto::key_derivation::KeyDerivationParams;
use crate::error::{LockerError, LockerResult};
use crate::password::strength::{LOCAL_GUESS_RATE, WEB_GUESS_RATE};
use crate::password::GeneratorOptions;
use crate::storage::file_io::write_bytes_atomic;
use crate::storage::{FileFormat, StoreOptions};

/// Attacker speeds used by strength estimates, in guesses per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessRates {
    /// Online attack against a web login
    pub web: f64,
    /// Offline attack against a stolen database
    pub local: f64,
}

impl Default for GuessRates {
    fn default() -> Self {
        Self {
            web: WEB_GUESS_RATE,
            local: LOCAL_GUESS_RATE,
        }
    }
}

/// User settings for PassLocker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Layout used by `new`
    #[serde(default)]
    pub default_format: FileFormat,

    /// Argon2id cost for new v2 databases
    #[serde(default)]
    pub key_derivation: KeyDerivationParams,

    /// Generator defaults
    #[serde(default)]
    pub generator: GeneratorOptions,

    #[serde(default)]
    pub guess_rates: GuessRates,

    /// Passphrases shorter than this draw a warning
    #[serde(default = "default_min_passphrase_len")]
    pub min_passphrase_len: usize,

    /// Database used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_min_passphrase_len() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_format: FileFormat::default(),
            key_derivation: KeyDerivationParams::default(),
            generator: GeneratorOptions::default(),
            guess_rates: GuessRates::default(),
            min_passphrase_len: default_min_passphrase_len(),
            database: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LockerPaths) -> LockerResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LockerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LockerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LockerPaths) -> LockerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LockerError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_bytes_atomic(paths.settings_file(), contents.as_bytes())
    }

    /// Options for a newly created database
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            format: self.default_format,
            key_derivation: self.key_derivation,
        }
    }

    /// Database to use when none is given explicitly
    pub fn database_file(&self, paths: &LockerPaths) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| paths.default_database_file())
    }
}
