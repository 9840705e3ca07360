//! Random password generator
//!
//! Characters are drawn from the OS random source.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{LockerError, LockerResult};

/// Shortest password the generator will produce
pub const MIN_LENGTH: usize = 6;

/// Symbols used when punctuation is enabled
pub const GENERATOR_PUNCTUATION: &str = "!@#$%^&*~()<>";

/// Characters dropped by `exclude_similar`
pub const SIMILAR_CHARACTERS: &str = "1IlS$";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Which characters to generate from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    /// Leave out look-alike characters (1 I l S $)
    pub exclude_similar: bool,
    /// Force the first character to be a letter
    pub start_with_letter: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 8,
            lowercase: true,
            uppercase: true,
            digits: true,
            punctuation: false,
            exclude_similar: true,
            start_with_letter: false,
        }
    }
}

impl GeneratorOptions {
    /// The full alphabet these options select
    pub fn charset(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.lowercase {
            chars.push_str(LOWERCASE);
        }
        if self.uppercase {
            chars.push_str(UPPERCASE);
        }
        if self.digits {
            chars.push_str(DIGITS);
        }
        if self.punctuation {
            chars.push_str(GENERATOR_PUNCTUATION);
        }

        chars
            .chars()
            .filter(|c| !(self.exclude_similar && SIMILAR_CHARACTERS.contains(*c)))
            .collect()
    }
}

/// Generate a password matching `options`
pub fn generate_password(options: &GeneratorOptions) -> LockerResult<String> {
    if options.length < MIN_LENGTH {
        return Err(LockerError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_LENGTH
        )));
    }

    let charset = options.charset();
    if charset.is_empty() {
        return Err(LockerError::Validation("No characters selected".into()));
    }

    let mut rng = OsRng;
    let mut password = String::with_capacity(options.length);

    if options.start_with_letter {
        let letters: Vec<char> = charset
            .iter()
            .copied()
            .filter(char::is_ascii_alphabetic)
            .collect();
        let first = letters.choose(&mut rng).ok_or_else(|| {
            LockerError::Validation("Cannot start with a letter: no letters selected".into())
        })?;
        password.push(*first);
    }

    while password.len() < options.length {
        if let Some(c) = charset.choose(&mut rng) {
            password.push(*c);
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let password = generate_password(&GeneratorOptions::default()).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(c)));
    }

    #[test]
    fn test_too_short_rejected() {
        let options = GeneratorOptions {
            length: 5,
            ..Default::default()
        };
        assert!(matches!(
            generate_password(&options),
            Err(LockerError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            digits: false,
            punctuation: false,
            ..Default::default()
        };
        assert!(generate_password(&options).is_err());
    }

    #[test]
    fn test_start_with_letter() {
        let options = GeneratorOptions {
            length: 12,
            punctuation: true,
            start_with_letter: true,
            ..Default::default()
        };
        for _ in 0..50 {
            let password = generate_password(&options).unwrap();
            assert_eq!(password.len(), 12);
            assert!(password.chars().next().unwrap().is_ascii_alphabetic());
        }
    }

    #[test]
    fn test_start_with_letter_needs_letters() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            start_with_letter: true,
            ..Default::default()
        };
        assert!(generate_password(&options).is_err());
    }

    #[test]
    fn test_digits_only_charset() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            exclude_similar: false,
            ..Default::default()
        };
        assert_eq!(options.charset().len(), 10);

        let password = generate_password(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_exclude_similar_removes_lookalikes() {
        let options = GeneratorOptions {
            punctuation: true,
            ..Default::default()
        };
        let charset = options.charset();
        for c in SIMILAR_CHARACTERS.chars() {
            assert!(!charset.contains(&c));
        }
        assert!(charset.contains(&'@'));
    }

    #[test]
    fn test_passwords_differ() {
        let options = GeneratorOptions {
            length: 20,
            ..Default::default()
        };
        let a = generate_password(&options).unwrap();
        let b = generate_password(&options).unwrap();
        assert_ne!(a, b);
    }
}
