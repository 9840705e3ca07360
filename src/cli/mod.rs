//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and service layer.

pub mod database;
pub mod password;
pub mod prompt;
pub mod records;

use std::path::{Path, PathBuf};

pub use database::{
    handle_export, handle_import, handle_new, handle_passwd, handle_status, handle_upgrade,
    FormatArg, NewArgs, PasswdArgs,
};
pub use password::{handle_generate, handle_strength, GenerateArgs, StrengthArgs};
pub use records::{
    handle_add, handle_categories, handle_edit, handle_list, handle_remove, handle_show,
    AddArgs, EditArgs, ListArgs, ShowArgs,
};

use crate::config::{LockerPaths, Settings};
use crate::crypto::SecureString;
use crate::error::{LockerError, LockerResult};
use crate::storage::Store;

/// Paths, settings and target database for one invocation
pub struct CliContext {
    pub paths: LockerPaths,
    pub settings: Settings,
    database: PathBuf,
}

impl CliContext {
    /// Resolve the database: `--file`, then the configured one, then the default
    pub fn new(paths: LockerPaths, settings: Settings, file: Option<PathBuf>) -> Self {
        let database = file.unwrap_or_else(|| settings.database_file(&paths));
        Self {
            paths,
            settings,
            database,
        }
    }

    /// Database file this invocation works on
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Open the database, failing with the load reason if it is unusable
    pub fn open_store(&self, passphrase: &SecureString) -> LockerResult<Store> {
        let store = Store::open(passphrase, &self.database);

        if let Some(load_error) = store.load_error() {
            return Err(LockerError::InvalidStore(format!(
                "{}: {}",
                self.database.display(),
                load_error
            )));
        }

        Ok(store)
    }
}

/// Show paths and settings, optionally writing them out
pub fn handle_config(ctx: &CliContext, init: bool) -> LockerResult<()> {
    let settings = &ctx.settings;

    if init {
        if ctx.paths.settings_file().exists() {
            println!(
                "Settings file already exists: {}",
                ctx.paths.settings_file().display()
            );
        } else {
            settings.save(&ctx.paths)?;
            println!("Wrote {}", ctx.paths.settings_file().display());
        }
        println!();
    }

    println!("PassLocker Configuration");
    println!("========================");
    println!("Config directory: {}", ctx.paths.base_dir().display());
    println!("Settings file:    {}", ctx.paths.settings_file().display());
    println!("Database:         {}", ctx.database().display());
    println!();
    println!("Settings:");
    println!("  Default format:     {}", settings.default_format);
    println!(
        "  Key derivation:     Argon2id, {} KiB, {} passes, {} lanes",
        settings.key_derivation.memory_cost,
        settings.key_derivation.time_cost,
        settings.key_derivation.parallelism
    );
    println!("  Min passphrase len: {}", settings.min_passphrase_len);
    println!("  Generator length:   {}", settings.generator.length);
    println!(
        "  Guess rates:        web {:e}/s, local {:e}/s",
        settings.guess_rates.web, settings.guess_rates.local
    );

    Ok(())
}
