//! Password helpers: strength estimation and generation

pub mod generator;
pub mod strength;

pub use generator::{generate_password, GeneratorOptions, MIN_LENGTH};
pub use strength::{
    estimate_crack_time, gauge_level, StrengthRating, LOCAL_GUESS_RATE, WEB_GUESS_RATE,
};
