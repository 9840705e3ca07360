//! Record CLI commands
//!
//! Records are addressed by their 1-based position in the database, as
//! shown in the `#` column of `list`.

use clap::Args;

use super::prompt::{prompt_passphrase, read_passphrase};
use super::CliContext;
use crate::display::{format_category_list, format_record_details, format_record_list};
use crate::error::LockerResult;
use crate::models::{CategoryFilter, Record};
use crate::password::{estimate_crack_time, generate_password, StrengthRating};
use crate::services::RecordService;

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only records in this category ("All" for every record)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Print secrets instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for `show`
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Record number
    pub number: usize,

    /// Print the secret instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for `add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title (site or service name)
    #[arg(short, long)]
    pub title: String,

    /// Account or user name
    #[arg(short, long, default_value = "")]
    pub account: String,

    /// Secret to store (prompted for when neither this nor --generate is given)
    #[arg(short, long, conflicts_with = "generate")]
    pub secret: Option<String>,

    /// Generate a random secret using the configured generator settings
    #[arg(short, long)]
    pub generate: bool,

    /// Category (blank becomes "None")
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

/// Arguments for `edit`
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Record number
    pub number: usize,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub account: Option<String>,

    #[arg(short, long, conflicts_with = "generate")]
    pub secret: Option<String>,

    /// Replace the secret with a generated one
    #[arg(short, long)]
    pub generate: bool,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.account.is_some()
            || self.secret.is_some()
            || self.generate
            || self.category.is_some()
            || self.notes.is_some()
    }
}

/// List records in display order
pub fn handle_list(ctx: &CliContext, args: ListArgs) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let store = ctx.open_store(&passphrase)?;

    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or_default();

    let rows = store.list_sorted(&filter);
    print!("{}", format_record_list(&rows, args.show_secrets));
    Ok(())
}

/// Show one record
pub fn handle_show(ctx: &CliContext, args: ShowArgs) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let store = ctx.open_store(&passphrase)?;

    let id = store.find_by_position(args.number)?;
    if let Some(record) = store.record(id) {
        print!(
            "{}",
            format_record_details(args.number, record, args.show_secrets)
        );
    }
    Ok(())
}

/// List categories
pub fn handle_categories(ctx: &CliContext) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let store = ctx.open_store(&passphrase)?;

    print!("{}", format_category_list(&store.list_categories()));
    Ok(())
}

/// Add a record and save
pub fn handle_add(ctx: &CliContext, args: AddArgs) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    let secret = match (args.secret, args.generate) {
        (Some(secret), _) => secret,
        (None, true) => generate_password(&ctx.settings.generator)?,
        (None, false) => prompt_passphrase("Secret: ")?.as_str().to_string(),
    };

    let record = Record::new(args.title, args.account, secret, args.category, args.notes);
    let id = RecordService::new(&mut store).add(record)?;
    store.save()?;

    let position = store.position(id).map_or(0, |i| i + 1);
    if let Some(record) = store.record(id) {
        println!("Added record #{}: {}", position, record.title);
        if args.generate {
            println!("  Secret: {}", record.secret);
        }
        print_strength(ctx, &record.secret);
    }
    Ok(())
}

/// Change fields of a record and save
pub fn handle_edit(ctx: &CliContext, args: EditArgs) -> LockerResult<()> {
    if !args.has_changes() {
        println!("No changes specified. Use --title, --account, --secret, --category or --notes.");
        return Ok(());
    }

    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    let id = store.find_by_position(args.number)?;
    let mut values = match store.record(id) {
        Some(record) => record.clone(),
        None => return Ok(()),
    };

    if let Some(title) = args.title {
        values.title = title;
    }
    if let Some(account) = args.account {
        values.account = account;
    }
    if let Some(secret) = args.secret {
        values.secret = secret;
    } else if args.generate {
        values.secret = generate_password(&ctx.settings.generator)?;
        println!("  New secret: {}", values.secret);
    }
    if let Some(category) = args.category {
        values.category = category;
    }
    if let Some(notes) = args.notes {
        values.notes = notes;
    }

    let changed = RecordService::new(&mut store).update(id, values)?;
    if !changed {
        println!("Record #{} is unchanged.", args.number);
        return Ok(());
    }
    store.save()?;

    println!("Updated record #{}", args.number);
    Ok(())
}

/// Remove a record and save
pub fn handle_remove(ctx: &CliContext, number: usize) -> LockerResult<()> {
    let passphrase = read_passphrase()?;
    let mut store = ctx.open_store(&passphrase)?;

    let id = store.find_by_position(number)?;
    let removed = RecordService::new(&mut store).remove(id)?;
    store.save()?;

    println!("Removed record #{}: {}", number, removed.title);
    Ok(())
}

fn print_strength(ctx: &CliContext, secret: &str) {
    if secret.is_empty() {
        return;
    }
    let days = estimate_crack_time(secret, ctx.settings.guess_rates.web);
    println!(
        "  Strength: {} (online attack)",
        StrengthRating::from_days(days)
    );
}
