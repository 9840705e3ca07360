//! Password generation and strength CLI commands
//!
//! Neither command touches a database.

use clap::Args;

use super::prompt::prompt_passphrase;
use super::CliContext;
use crate::error::LockerResult;
use crate::password::strength::{charset_size, describe_days, entropy_bits, gauge_max};
use crate::password::{estimate_crack_time, gauge_level, generate_password, StrengthRating};

/// Arguments for `generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Password length (at least 6)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Include punctuation (!@#$%^&*~()<>)
    #[arg(short, long)]
    pub punctuation: bool,

    /// Allow look-alike characters (1 I l S $)
    #[arg(long)]
    pub allow_similar: bool,

    /// Start with a letter
    #[arg(long)]
    pub start_with_letter: bool,

    /// Rate strength against an online attack instead of an offline one
    #[arg(long)]
    pub web: bool,
}

/// Arguments for `strength`
#[derive(Debug, Args)]
pub struct StrengthArgs {
    /// Password to rate (prompted for when omitted)
    pub password: Option<String>,

    /// Rate against an online attack instead of an offline one
    #[arg(long)]
    pub web: bool,
}

/// Generate a random password
pub fn handle_generate(ctx: &CliContext, args: GenerateArgs) -> LockerResult<()> {
    let mut options = ctx.settings.generator.clone();
    if let Some(length) = args.length {
        options.length = length;
    }
    options.lowercase &= !args.no_lowercase;
    options.uppercase &= !args.no_uppercase;
    options.digits &= !args.no_digits;
    options.punctuation |= args.punctuation;
    options.exclude_similar &= !args.allow_similar;
    options.start_with_letter |= args.start_with_letter;

    let password = generate_password(&options)?;
    println!("{}", password);

    let rate = guess_rate(ctx, args.web);
    print_rating(&password, rate);
    Ok(())
}

/// Rate a password
pub fn handle_strength(ctx: &CliContext, args: StrengthArgs) -> LockerResult<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_passphrase("Password to rate: ")?.as_str().to_string(),
    };

    let rate = guess_rate(ctx, args.web);
    println!("Alphabet:     {} characters", charset_size(&password));
    println!("Entropy:      {:.1} bits", entropy_bits(&password));
    print_rating(&password, rate);
    Ok(())
}

fn guess_rate(ctx: &CliContext, web: bool) -> f64 {
    if web {
        ctx.settings.guess_rates.web
    } else {
        ctx.settings.guess_rates.local
    }
}

fn print_rating(password: &str, rate: f64) {
    let days = estimate_crack_time(password, rate);
    let level = gauge_level(days);
    let filled = level.round() as usize;
    let total = gauge_max() as usize;

    println!(
        "Crack time:   {} at {:e} guesses/s",
        describe_days(days),
        rate
    );
    println!(
        "Strength:     {} [{}{}]",
        StrengthRating::from_days(days),
        "#".repeat(filled),
        ".".repeat(total.saturating_sub(filled))
    );
}
