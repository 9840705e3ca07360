//! Brute-force strength estimate
//!
//! The estimate assumes the password was drawn uniformly from the character
//! classes it uses. A dictionary word with substitutions scores far higher
//! than it deserves.

use std::fmt;

/// Guesses per second assumed for an online attack
pub const WEB_GUESS_RATE: f64 = 1e6;

/// Guesses per second assumed for an offline attack on a stolen file
pub const LOCAL_GUESS_RATE: f64 = 1e12;

/// Symbols counted as the punctuation class
pub const STRENGTH_PUNCTUATION: &str = "!@#$%^&*~()<>_-+=[]{};:?";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gauge ceiling, in log2 days (about three million years)
const GAUGE_MAX_LOG_DAYS: f64 = 30.0;

/// Size of the alphabet a password appears to be drawn from
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| STRENGTH_PUNCTUATION.contains(c)) {
        size += STRENGTH_PUNCTUATION.chars().count() as u32;
    }
    size
}

/// Bits of entropy: length times log2 of the alphabet size
pub fn entropy_bits(password: &str) -> f64 {
    let size = charset_size(password);
    if size == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(size).log2()
}

/// Mean days to brute-force `password` at `guesses_per_second`
///
/// Returns 0 when no known character class is present.
pub fn estimate_crack_time(password: &str, guesses_per_second: f64) -> f64 {
    if charset_size(password) == 0 {
        return 0.0;
    }
    let seconds = (entropy_bits(password) - 1.0).exp2() / guesses_per_second;
    seconds / SECONDS_PER_DAY
}

/// Coarse rating of a crack-time estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthRating {
    /// Under 30 days
    Weak,
    /// Under ten years
    Moderate,
    Strong,
}

impl StrengthRating {
    pub fn from_days(days: f64) -> Self {
        if days < 30.0 {
            Self::Weak
        } else if days < 3650.0 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Moderate => write!(f, "moderate"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

/// Position on a 0..32 logarithmic gauge
pub fn gauge_level(days: f64) -> f64 {
    if days > 0.0 {
        days.log2().clamp(0.0, GAUGE_MAX_LOG_DAYS) + 2.0
    } else {
        0.5
    }
}

/// Upper bound of [`gauge_level`]
pub fn gauge_max() -> f64 {
    GAUGE_MAX_LOG_DAYS + 2.0
}

/// Human-readable duration for a number of days
pub fn describe_days(days: f64) -> String {
    if days < 1.0 / 24.0 {
        let seconds = days * SECONDS_PER_DAY;
        format!("{:.0} seconds", seconds.max(0.0))
    } else if days < 1.0 {
        format!("{:.0} hours", days * 24.0)
    } else if days < 365.0 {
        format!("{:.0} days", days)
    } else if days < 1e9 * 365.0 {
        format!("{:.0} years", days / 365.0)
    } else {
        format!("{:.1e} years", days / 365.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= b.abs() * 1e-9
    }

    #[test]
    fn test_charset_size() {
        assert_eq!(charset_size(""), 0);
        assert_eq!(charset_size("123"), 10);
        assert_eq!(charset_size("abc"), 26);
        assert_eq!(charset_size("aB3"), 62);
        assert_eq!(charset_size("aB3!"), 86);
        assert_eq!(charset_size("   "), 0);
    }

    #[test]
    fn test_empty_password_takes_no_time() {
        assert_eq!(estimate_crack_time("", LOCAL_GUESS_RATE), 0.0);
        assert_eq!(estimate_crack_time("\u{e9}\u{e8}", LOCAL_GUESS_RATE), 0.0);
    }

    #[test]
    fn test_lowercase_eight_chars() {
        // 26^8 / 2 guesses at 1e6/s
        let expected = 26f64.powi(8) / 2.0 / WEB_GUESS_RATE / 86_400.0;
        assert!(approx_eq(estimate_crack_time("abcdefgh", WEB_GUESS_RATE), expected));
    }

    #[test]
    fn test_local_rate_is_a_million_times_faster() {
        let web = estimate_crack_time("Passw0rd", WEB_GUESS_RATE);
        let local = estimate_crack_time("Passw0rd", LOCAL_GUESS_RATE);
        assert!(approx_eq(web / local, 1e6));
    }

    #[test]
    fn test_longer_is_stronger() {
        let short = estimate_crack_time("aB3dE6", LOCAL_GUESS_RATE);
        let long = estimate_crack_time("aB3dE6gH9j", LOCAL_GUESS_RATE);
        assert!(long > short);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(StrengthRating::from_days(0.0), StrengthRating::Weak);
        assert_eq!(StrengthRating::from_days(29.9), StrengthRating::Weak);
        assert_eq!(StrengthRating::from_days(30.0), StrengthRating::Moderate);
        assert_eq!(StrengthRating::from_days(3649.0), StrengthRating::Moderate);
        assert_eq!(StrengthRating::from_days(3650.0), StrengthRating::Strong);
    }

    #[test]
    fn test_gauge_level() {
        assert_eq!(gauge_level(0.0), 0.5);
        assert_eq!(gauge_level(0.25), 2.0);
        assert_eq!(gauge_level(1.0), 2.0);
        assert_eq!(gauge_level(8.0), 5.0);
        assert_eq!(gauge_level(1e300), gauge_max());
    }

    #[test]
    fn test_describe_days() {
        assert_eq!(describe_days(0.0), "0 seconds");
        assert_eq!(describe_days(0.5), "12 hours");
        assert_eq!(describe_days(10.0), "10 days");
        assert_eq!(describe_days(730.0), "2 years");
    }
}
