use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use passlocker::cli::{
    self, AddArgs, CliContext, EditArgs, GenerateArgs, ListArgs, NewArgs, PasswdArgs, ShowArgs,
    StrengthArgs,
};
use passlocker::config::{LockerPaths, Settings};
use passlocker::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "passlocker",
    version,
    about = "Encrypted, file-backed credential locker",
    long_about = "PassLocker keeps titles, account names, secrets, categories and notes \
                  in a single passphrase-encrypted file. The passphrase is read from \
                  PASSLOCKER_PASSPHRASE when set, otherwise prompted for."
)]
struct Cli {
    /// Database file (defaults to the configured one)
    #[arg(short, long, global = true, env = "PASSLOCKER_FILE")]
    file: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new, empty database
    New(NewArgs),

    /// List records
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one record
    Show(ShowArgs),

    /// List categories
    Categories,

    /// Add a record
    Add(AddArgs),

    /// Edit a record
    Edit(EditArgs),

    /// Remove a record
    #[command(alias = "rm")]
    Remove {
        /// Record number
        number: usize,
    },

    /// Import records from a CSV file, skipping duplicates
    Import {
        /// CSV file (title, account, secret, category, notes; no header)
        csv: PathBuf,
    },

    /// Export all records to an unencrypted CSV file
    Export {
        /// Destination CSV file
        csv: PathBuf,
    },

    /// Change the database passphrase
    Passwd(PasswdArgs),

    /// Rewrite a legacy database in the v2 format
    Upgrade,

    /// Show database path, format and record count
    Status,

    /// Generate a random password
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Estimate how long a password takes to brute-force
    Strength(StrengthArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file if it is missing
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = LockerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings, cli.file);

    match cli.command {
        Commands::New(args) => cli::handle_new(&ctx, args)?,
        Commands::List(args) => cli::handle_list(&ctx, args)?,
        Commands::Show(args) => cli::handle_show(&ctx, args)?,
        Commands::Categories => cli::handle_categories(&ctx)?,
        Commands::Add(args) => cli::handle_add(&ctx, args)?,
        Commands::Edit(args) => cli::handle_edit(&ctx, args)?,
        Commands::Remove { number } => cli::handle_remove(&ctx, number)?,
        Commands::Import { csv } => cli::handle_import(&ctx, &csv)?,
        Commands::Export { csv } => cli::handle_export(&ctx, &csv)?,
        Commands::Passwd(args) => cli::handle_passwd(&ctx, args)?,
        Commands::Upgrade => cli::handle_upgrade(&ctx)?,
        Commands::Status => cli::handle_status(&ctx)?,
        Commands::Generate(args) => cli::handle_generate(&ctx, args)?,
        Commands::Strength(args) => cli::handle_strength(&ctx, args)?,
        Commands::Config { init } => cli::handle_config(&ctx, init)?,
    }

    Ok(())
}
