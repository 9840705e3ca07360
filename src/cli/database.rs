//! Database CLI commands
//!
//! Creating, re-keying, upgrading and inspecting database files, plus CSV
//! import and export.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use super::prompt::{read_new_passphrase, read_passphrase, read_replacement_passphrase};
use super::CliContext;
use crate::error::{LockerError, LockerResult};
use crate::storage::{FileFormat, Store};

/// File layout choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// SHA-256 key, no authentication (compatible with older files)
    Legacy,
    /// Argon2id key with an authentication tag
    V2,
}

impl From<FormatArg> for FileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Legacy => FileFormat::Legacy,
            FormatArg::V2 => FileFormat::V2,
        }
    }
}

/// Arguments for `new`
#[derive(Debug, Args)]
pub struct NewArgs {
    /// File layout (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `passwd`
#[derive(Debug, Args)]
pub struct PasswdArgs {
    /// Write the re-keyed database here instead of in place
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Create an empty database
pub fn handle_new(ctx: &CliContext, args: NewArgs) -> LockerResult<()> {
    let path = ctx.database().to_path_buf();

    if path.exists() && !args.force {
        return Err(LockerError::Validation(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    let mut options = ctx.settings.store_options();
    if let Some(format) = args.format {
        options.format = format.into();
    }

    let passphrase = read_new_passphrase(ctx.settings.min_passphrase_len)?;
    Store::create_new(&passphrase, &path, &options)?;

    println!("Created {} database: {}", options.format, path.display());
    Ok(())
}

/// Save the database under a new passphrase
pub fn handle_passwd(ctx: &CliContext, args: PasswdArgs) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    let new_passphrase = read_replacement_passphrase(ctx.settings.min_passphrase_len)?;
    store.save_as(args.out.as_deref(), Some(new_passphrase.as_str()))?;

    println!("Passphrase changed: {}", store.path().display());
    Ok(())
}

/// Rewrite a legacy database in the v2 layout
pub fn handle_upgrade(ctx: &CliContext) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    if store.format() == Some(FileFormat::V2) {
        println!("Database is already in the v2 format.");
        return Ok(());
    }

    store.save_with_format(&passphrase, FileFormat::V2, &ctx.settings.key_derivation)?;

    println!(
        "Upgraded {} to the v2 format ({} records).",
        store.path().display(),
        store.len()
    );
    Ok(())
}

/// Show path, layout and record count
pub fn handle_status(ctx: &CliContext) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let store = ctx.open_store(&passphrase)?;

    println!("Database: {}", store.path().display());
    match store.format() {
        Some(format) => println!("Format:   {}", format),
        None => println!("Format:   unknown"),
    }
    if let Some(params) = store.key_derivation() {
        println!(
            "KDF:      Argon2id, {} KiB, {} passes, {} lanes",
            params.memory_cost, params.time_cost, params.parallelism
        );
    } else {
        println!("KDF:      SHA-256 (unsalted; run `passlocker upgrade`)");
    }
    println!("Records:  {}", store.len());
    println!("Categories: {}", store.list_categories().len() - 1);

    Ok(())
}

/// Append records from a CSV file
pub fn handle_import(ctx: &CliContext, csv_path: &Path) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    let summary = store.import_csv(csv_path)?;
    if store.has_unsaved_changes() {
        store.save()?;
    }

    println!(
        "Imported {} record(s), skipped {} duplicate(s).",
        summary.imported, summary.duplicates_skipped
    );
    Ok(())
}

/// Write all records to an unencrypted CSV file
pub fn handle_export(ctx: &CliContext, csv_path: &Path) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let store = ctx.open_store(&passphrase)?;

    let count = store.export_csv(csv_path)?;

    println!("Exported {} record(s) to {}", count, csv_path.display());
    eprintln!("Warning: the exported file is NOT encrypted.");
    Ok(())
}
